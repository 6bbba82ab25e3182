//! Geometry trait and Contact for ray-surface intersection.

use crate::{RenderError, RenderResult};
use prism_math::{Point3, Ray, Sphere, Vec3};

/// Record of a ray hitting a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Ray parameter of the hit; always non-negative
    pub distance: f32,
    /// Point of intersection, `ray.at(distance)`
    pub point: Point3,
    /// Unit surface normal pointing out of the surface
    pub normal: Vec3,
}

impl Contact {
    /// Build a contact for a ray at parameter `distance` with the given
    /// (not necessarily unit) outward normal.
    pub fn from_ray(ray: &Ray, distance: f32, outward_normal: Vec3) -> Self {
        Self {
            distance,
            point: ray.at(distance),
            normal: outward_normal.normalize(),
        }
    }
}

/// Trait for surfaces that can be hit by rays.
pub trait Geometry: Send + Sync {
    /// Test the ray against this surface.
    ///
    /// Returns the nearest contact at or in front of the ray origin, or
    /// `None` when the ray misses.
    fn intersect(&self, ray: &Ray) -> Option<Contact>;
}

/// A sphere surface.
#[derive(Debug, Clone, Copy)]
pub struct SphereGeometry {
    sphere: Sphere,
}

impl SphereGeometry {
    /// Create a new sphere surface.
    ///
    /// Fails when the center is not finite or the radius is not a positive
    /// finite number, since the outward normal is undefined for those.
    pub fn new(center: Point3, radius: f32) -> RenderResult<Self> {
        if !center.is_finite() {
            return Err(RenderError::InvalidGeometry(format!(
                "sphere center {center} is not finite"
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RenderError::InvalidGeometry(format!(
                "sphere radius must be positive and finite, got {radius}"
            )));
        }

        Ok(Self {
            sphere: Sphere::new(center, radius),
        })
    }
}

impl Geometry for SphereGeometry {
    fn intersect(&self, ray: &Ray) -> Option<Contact> {
        let t = self.sphere.intersect(ray)?;
        let point = ray.at(t);
        Some(Contact::from_ray(ray, t, point - self.sphere.center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_contact() {
        let sphere = SphereGeometry::new(Vec3::new(0.0, 0.0, -5.0), 1.0).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let contact = sphere.intersect(&ray).unwrap();
        assert!((contact.distance - 4.0).abs() < 1e-5);
        assert!((contact.point - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-5);
        // Outward normal faces back towards the camera
        assert!((contact.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_contact_point_lies_on_ray() {
        let sphere = SphereGeometry::new(Vec3::new(3.0, 1.0, -2.0), 1.5).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(3.0, 0.5, -2.0).normalize());

        let contact = sphere.intersect(&ray).unwrap();
        assert!((contact.point - ray.at(contact.distance)).length() < 1e-5);
        assert!((contact.normal.length() - 1.0).abs() < 1e-5);
        // Point lies on the sphere surface
        let r = (contact.point - Vec3::new(3.0, 1.0, -2.0)).length();
        assert!((r - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_inside_contact_normal_still_outward() {
        let sphere = SphereGeometry::new(Vec3::ZERO, 2.0).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        let contact = sphere.intersect(&ray).unwrap();
        assert!((contact.distance - 2.0).abs() < 1e-5);
        assert!((contact.normal - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = SphereGeometry::new(Vec3::new(0.0, 0.0, -1.0), 0.5).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_invalid_sphere_rejected() {
        assert!(matches!(
            SphereGeometry::new(Vec3::ZERO, 0.0),
            Err(RenderError::InvalidGeometry(_))
        ));
        assert!(SphereGeometry::new(Vec3::ZERO, -1.0).is_err());
        assert!(SphereGeometry::new(Vec3::ZERO, f32::NAN).is_err());
        assert!(SphereGeometry::new(Vec3::new(f32::INFINITY, 0.0, 0.0), 1.0).is_err());
    }
}
