//! Prism renderer - CPU ray casting
//!
//! Casts one ray per pixel, resolves the nearest surface and shades it with
//! an ambient term plus one diffuse term per point light.

mod camera;
mod colorizer;
pub mod display;
mod error;
mod geometry;
mod light;
mod optics;
mod scene;
mod viewport;

pub use camera::Camera;
pub use colorizer::{CheckerColorizer, Color, Colorizer, FlatColorizer, BACKGROUND};
pub use display::to_rgba;
pub use error::{RenderError, RenderResult};
pub use geometry::{Contact, Geometry, SphereGeometry};
pub use light::{Light, PointLight};
pub use optics::OpticalProperties;
pub use scene::{Object, RenderConfig, Scene};
pub use viewport::Viewport;

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Point3, Ray, Vec3};
