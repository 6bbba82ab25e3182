// Re-export glam for convenience
pub use glam::*;

/// Points and vectors share one representation.
pub type Point3 = Vec3;

// Prism math types
mod interval;
mod ray;
mod sphere;

pub use interval::Interval;
pub use ray::Ray;
pub use sphere::Sphere;
