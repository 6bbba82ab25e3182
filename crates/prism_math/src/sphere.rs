use crate::{Interval, Point3, Ray};

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Solve `a t² + b t + c = 0` for the ray parameter of the first
    /// surface crossing at or in front of the ray origin.
    ///
    /// Returns the smaller root when it is non-negative, otherwise the larger
    /// one (the ray starts inside the sphere), otherwise `None`.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let delta = b * b - 4.0 * a * c;
        if delta < 0.0 {
            return None;
        }

        let sqrt_delta = delta.sqrt();
        let near = (-b - sqrt_delta) / (2.0 * a);
        let far = (-b + sqrt_delta) / (2.0 * a);

        [near, far]
            .into_iter()
            .find(|&t| Interval::FORWARD.contains(t))
    }
}
