//! Pinhole camera for primary ray generation.

use crate::{RenderError, RenderResult, Viewport};
use prism_math::{Point3, Ray, Vec3};
use std::f32::consts::PI;

/// World up direction used to build the camera basis.
const WORLD_UP: Vec3 = Vec3::Y;

/// A pinhole camera defined by its position, view direction and horizontal
/// field of view. The vertical field of view follows from the viewport's
/// aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Point3,
    direction: Vec3,
    horizontal_fov: f32,
}

impl Camera {
    /// Create a new camera.
    ///
    /// - `origin`: Position of the pinhole
    /// - `direction`: View direction, any non-zero length, not parallel to +Y
    /// - `horizontal_fov`: Horizontal field of view in radians, in (0, π)
    pub fn new(origin: Point3, direction: Vec3, horizontal_fov: f32) -> RenderResult<Self> {
        if !origin.is_finite() {
            return Err(RenderError::InvalidCamera(format!(
                "origin {origin} is not finite"
            )));
        }
        if !direction.is_finite() || direction.length_squared() == 0.0 {
            return Err(RenderError::InvalidCamera(format!(
                "direction {direction} must be finite and non-zero"
            )));
        }
        if direction.normalize().cross(WORLD_UP).length_squared() < 1e-12 {
            return Err(RenderError::InvalidCamera(format!(
                "direction {direction} is parallel to world up"
            )));
        }
        if !(horizontal_fov > 0.0 && horizontal_fov < PI) {
            return Err(RenderError::InvalidCamera(format!(
                "horizontal field of view must be in (0, π), got {horizontal_fov}"
            )));
        }

        Ok(Self {
            origin,
            direction,
            horizontal_fov,
        })
    }

    /// Vertical field of view for a viewport's aspect ratio.
    pub fn vertical_fov(&self, viewport: &Viewport) -> f32 {
        self.vertical_fov_for_size(viewport.width(), viewport.height())
    }

    fn vertical_fov_for_size(&self, width: u32, height: u32) -> f32 {
        let aspect = height as f32 / width as f32;
        2.0 * (aspect * (self.horizontal_fov / 2.0).tan()).atan()
    }

    /// Generate the normalized ray through the center of pixel (col, row).
    pub fn ray(&self, viewport: &Viewport, row: u32, col: u32) -> Ray {
        self.ray_for_size(viewport.width(), viewport.height(), row, col)
    }

    /// Same as [`Camera::ray`] for an image of `width × height` pixels.
    pub fn ray_for_size(&self, width: u32, height: u32, row: u32, col: u32) -> Ray {
        let vertical_fov = self.vertical_fov_for_size(width, height);
        let width = width as f32;
        let height = height as f32;

        // Camera basis
        let look = self.direction.normalize();
        let right = look.cross(WORLD_UP).normalize();
        let up = look.cross(right);

        // Image plane extents at unit distance
        let plane_width = 2.0 * (self.horizontal_fov / 2.0).tan();
        let plane_height = 2.0 * (vertical_fov / 2.0).tan();

        let pixel_width = plane_width / width;
        let pixel_height = plane_height / height;

        // Pixel center offsets from the image center
        let d_col = col as f32 - width / 2.0 + 0.5;
        let d_row = row as f32 - height / 2.0 + 0.5;

        let direction = look + pixel_width * d_col * right + pixel_height * d_row * up;

        Ray::new(self.origin, direction.normalize())
    }
}
