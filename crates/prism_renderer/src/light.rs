//! Light sources.

use crate::{Color, Contact};
use prism_math::Point3;

/// Trait for lights contributing color at a surface contact.
pub trait Light: Send + Sync {
    /// Light arriving at the contact, before surface color is applied.
    fn light_at_contact(&self, contact: &Contact) -> Color;
}

/// An isotropic point light with inverse-square falloff.
///
/// By default the Lambert cosine is `normal · normalize(point - origin)`,
/// measured along the light's travel direction and left unclamped. This is a
/// known accuracy gap: a surface facing the light gets a negative
/// contribution and one facing away gets a positive one. [`PointLight::oriented`]
/// measures the cosine towards the light instead, and [`PointLight::clamped`]
/// drops negative cosines.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    origin: Point3,
    color: Color,
    intensity: f32,
    oriented: bool,
    clamp_cosine: bool,
}

impl PointLight {
    pub fn new(origin: Point3, color: Color, intensity: f32) -> Self {
        Self {
            origin,
            color,
            intensity,
            oriented: false,
            clamp_cosine: false,
        }
    }

    /// Measure the cosine from the contact towards the light, so surfaces
    /// facing the light receive a positive contribution.
    pub fn oriented(mut self) -> Self {
        self.oriented = true;
        self
    }

    /// Clamp the cosine term to zero when it is negative.
    pub fn clamped(mut self) -> Self {
        self.clamp_cosine = true;
        self
    }
}

impl Light for PointLight {
    fn light_at_contact(&self, contact: &Contact) -> Color {
        let from_light = contact.point - self.origin;
        let dist_squared = from_light.length_squared();
        if dist_squared == 0.0 {
            return Color::ZERO;
        }

        let light_dir = from_light / dist_squared.sqrt();
        let mut cosine = contact.normal.dot(light_dir);
        if self.oriented {
            cosine = -cosine;
        }
        if self.clamp_cosine {
            cosine = cosine.max(0.0);
        }

        (self.intensity / dist_squared) * cosine * self.color
    }
}
