//! Surface color providers.

use crate::geometry::Contact;
use crate::{RenderError, RenderResult};
use prism_math::Vec3;

/// Color type alias (x = r, y = g, z = b).
///
/// Components are not clamped; mapping into a displayable range happens
/// once over a whole viewport.
pub type Color = Vec3;

/// Color returned for rays that hit nothing (cyan).
pub const BACKGROUND: Color = Color::new(0.0, 1.0, 1.0);

/// Trait for the intrinsic color of a surface, independent of lighting.
pub trait Colorizer: Send + Sync {
    /// Color of the surface at the given contact.
    fn color_at(&self, contact: &Contact) -> Color;
}

/// A single color over the whole surface.
#[derive(Debug, Clone, Copy)]
pub struct FlatColorizer {
    color: Color,
}

impl FlatColorizer {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Colorizer for FlatColorizer {
    fn color_at(&self, _contact: &Contact) -> Color {
        self.color
    }
}

/// Two colors alternating on a world-space 3D checker.
#[derive(Debug, Clone, Copy)]
pub struct CheckerColorizer {
    even: Color,
    odd: Color,
    inv_scale: f32,
}

impl CheckerColorizer {
    /// Create a checker with cells of `scale` world units.
    ///
    /// Fails unless `scale` is positive and finite.
    pub fn new(scale: f32, even: Color, odd: Color) -> RenderResult<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RenderError::InvalidColorizer(format!(
                "checker scale must be positive and finite, got {scale}"
            )));
        }

        Ok(Self {
            even,
            odd,
            inv_scale: 1.0 / scale,
        })
    }
}

impl Colorizer for CheckerColorizer {
    fn color_at(&self, contact: &Contact) -> Color {
        let cell = (self.inv_scale * contact.point).floor();
        let parity = (cell.x as i64 + cell.y as i64 + cell.z as i64).rem_euclid(2);

        if parity == 0 {
            self.even
        } else {
            self.odd
        }
    }
}
