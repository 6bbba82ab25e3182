//! Scene ownership, nearest-hit resolution and local shading.
//!
//! Shading is ambient plus one diffuse term per light:
//! - `ambient * surface`
//! - `+ Σ diffusion * light ⊙ surface`
//!
//! No shadows, reflection or refraction.

use crate::{
    Camera, Color, Colorizer, Contact, Geometry, Light, OpticalProperties, Viewport, BACKGROUND,
};
use prism_math::Ray;
use rayon::prelude::*;

/// Render configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Distribute viewport rows across the rayon thread pool
    pub parallel: bool,
}

/// A renderable object: one surface, its color and its optical coefficients.
///
/// Objects are only created by [`Scene::add_object`] and never change
/// afterwards.
pub struct Object {
    geometry: Box<dyn Geometry>,
    colorizer: Box<dyn Colorizer>,
    optical_properties: OpticalProperties,
}

impl Object {
    pub fn optical_properties(&self) -> &OpticalProperties {
        &self.optical_properties
    }

    /// Shade a contact on this object under the given lights.
    fn shade(&self, contact: &Contact, lights: &[Box<dyn Light>]) -> Color {
        let surface = self.colorizer.color_at(contact);
        let op = &self.optical_properties;

        lights.iter().fold(op.ambient * surface, |color, light| {
            let light_color = op.diffusion * light.light_at_contact(contact);
            color + light_color * surface
        })
    }
}

/// Objects and lights, in insertion order.
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<Box<dyn Light>>,
    background: Color,
}

impl Scene {
    /// Create an empty scene with the cyan background.
    pub fn new() -> Self {
        Self::with_background(BACKGROUND)
    }

    /// Create an empty scene returning `background` for rays that miss.
    pub fn with_background(background: Color) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            background,
        }
    }

    /// Add an object. The scene takes ownership of all three parts.
    pub fn add_object(
        &mut self,
        geometry: impl Geometry + 'static,
        colorizer: impl Colorizer + 'static,
        optical_properties: OpticalProperties,
    ) {
        self.objects.push(Object {
            geometry: Box::new(geometry),
            colorizer: Box::new(colorizer),
            optical_properties,
        });
        log::debug!("Added object #{}", self.objects.len());
    }

    /// Add a light. The scene takes ownership of it.
    pub fn add_light(&mut self, light: impl Light + 'static) {
        self.lights.push(Box::new(light));
        log::debug!("Added light #{}", self.lights.len());
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Find the object with the closest contact along the ray.
    ///
    /// Ties keep the object added first.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(&Object, Contact)> {
        let mut best: Option<(&Object, Contact)> = None;

        for object in &self.objects {
            if let Some(contact) = object.geometry.intersect(ray) {
                let closer = best
                    .as_ref()
                    .map_or(true, |(_, nearest)| contact.distance < nearest.distance);
                if closer {
                    best = Some((object, contact));
                }
            }
        }

        best
    }

    /// Compute the color seen along a ray.
    pub fn render_ray(&self, ray: &Ray) -> Color {
        match self.nearest_hit(ray) {
            Some((object, contact)) => object.shade(&contact, &self.lights),
            None => self.background,
        }
    }

    /// Render every pixel of the viewport, one row at a time.
    pub fn render(&self, camera: &Camera, viewport: &mut Viewport) {
        self.render_with(camera, viewport, &RenderConfig::default());
    }

    /// Render every pixel of the viewport with the given configuration.
    ///
    /// Each pixel reads only the scene and camera and writes only its own
    /// cell, so the parallel path produces the same buffer as the
    /// sequential one.
    pub fn render_with(&self, camera: &Camera, viewport: &mut Viewport, config: &RenderConfig) {
        if viewport.is_empty() {
            log::warn!(
                "Skipping render of empty {}x{} viewport",
                viewport.width(),
                viewport.height()
            );
            return;
        }

        log::info!(
            "Rendering {}x{} ({} objects, {} lights, parallel: {})",
            viewport.width(),
            viewport.height(),
            self.objects.len(),
            self.lights.len(),
            config.parallel
        );
        let start = std::time::Instant::now();

        let (width, height) = (viewport.width(), viewport.height());
        let render_row = |(row, pixels): (usize, &mut [Color])| {
            for (col, pixel) in pixels.iter_mut().enumerate() {
                let ray = camera.ray_for_size(width, height, row as u32, col as u32);
                *pixel = self.render_ray(&ray);
            }
        };

        if config.parallel {
            viewport
                .pixels_mut()
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(render_row);
        } else {
            viewport
                .pixels_mut()
                .chunks_mut(width as usize)
                .enumerate()
                .for_each(render_row);
        }

        log::info!("Rendered in {:?}", start.elapsed());
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
