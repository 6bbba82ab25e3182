//! JSON scene descriptions.
//!
//! ```json
//! {
//!   "width": 640, "height": 480,
//!   "camera": { "origin": [0, 0, 0], "direction": [1, 0, 0], "horizontal_fov": 0.8 },
//!   "spheres": [ { "center": [2, 0, 0], "radius": 1, "color": [1, 1, 1] } ],
//!   "lights": [ { "origin": [0, 2, 0], "color": [1, 1, 1], "intensity": 4, "oriented": true } ]
//! }
//! ```

use std::path::Path;

use prism_renderer::{
    Camera, CheckerColorizer, Color, FlatColorizer, OpticalProperties, PointLight, RenderConfig,
    RenderError, Scene, SphereGeometry, Vec3, Viewport, BACKGROUND,
};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] RenderError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneFile {
    pub width: u32,
    pub height: u32,
    pub camera: CameraDesc,
    #[serde(default)]
    pub background: Option<[f32; 3]>,
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
    #[serde(default)]
    pub lights: Vec<LightDesc>,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CameraDesc {
    pub origin: [f32; 3],
    pub direction: [f32; 3],
    /// Radians
    pub horizontal_fov: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SphereDesc {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    #[serde(default)]
    pub checker: Option<CheckerDesc>,
    #[serde(default)]
    pub ambient: Option<f32>,
    #[serde(default)]
    pub diffusion: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckerDesc {
    pub scale: f32,
    pub color: [f32; 3],
}

#[derive(Debug, Clone, Deserialize)]
pub struct LightDesc {
    pub origin: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
    #[serde(default)]
    pub oriented: bool,
    #[serde(default)]
    pub clamped: bool,
}

/// Everything needed for one render.
pub struct LoadedScene {
    pub scene: Scene,
    pub camera: Camera,
    pub viewport: Viewport,
    pub config: RenderConfig,
}

impl SceneFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneFileError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, SceneFileError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the scene, camera and viewport described by this file.
    pub fn build(&self) -> Result<LoadedScene, SceneFileError> {
        let background = self.background.map(Color::from_array).unwrap_or(BACKGROUND);
        let mut scene = Scene::with_background(background);

        for sphere in &self.spheres {
            let geometry = SphereGeometry::new(Vec3::from_array(sphere.center), sphere.radius)?;
            let defaults = OpticalProperties::default();
            let optics = OpticalProperties::new(
                sphere.ambient.unwrap_or(defaults.ambient),
                sphere.diffusion.unwrap_or(defaults.diffusion),
            );
            let color = Color::from_array(sphere.color);

            match &sphere.checker {
                Some(checker) => scene.add_object(
                    geometry,
                    CheckerColorizer::new(checker.scale, color, Color::from_array(checker.color))?,
                    optics,
                ),
                None => scene.add_object(geometry, FlatColorizer::new(color), optics),
            }
        }

        for light in &self.lights {
            let mut point = PointLight::new(
                Vec3::from_array(light.origin),
                Color::from_array(light.color),
                light.intensity,
            );
            if light.oriented {
                point = point.oriented();
            }
            if light.clamped {
                point = point.clamped();
            }
            scene.add_light(point);
        }

        let camera = Camera::new(
            Vec3::from_array(self.camera.origin),
            Vec3::from_array(self.camera.direction),
            self.camera.horizontal_fov,
        )?;

        Ok(LoadedScene {
            scene,
            camera,
            viewport: Viewport::new(self.width, self.height),
            config: RenderConfig {
                parallel: self.parallel,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "width": 40, "height": 30,
        "camera": { "origin": [0, 0, 0], "direction": [1, 0, 0], "horizontal_fov": 1.5707964 },
        "spheres": [
            { "center": [5, 0, 0], "radius": 1, "color": [1, 0, 0] },
            { "center": [9, 0, 0], "radius": 3, "color": [1, 1, 1],
              "checker": { "scale": 0.5, "color": [0, 0, 0] }, "ambient": 0.3 }
        ],
        "lights": [ { "origin": [0, 3, 0], "color": [1, 1, 1], "intensity": 5,
                      "oriented": true, "clamped": true } ],
        "parallel": true
    }"#;

    #[test]
    fn test_parse_and_build() {
        let file = SceneFile::from_json(SCENE).unwrap();
        assert_eq!(file.spheres.len(), 2);
        assert!(file.lights[0].oriented);
        assert!(file.lights[0].clamped);

        let loaded = file.build().unwrap();
        assert_eq!(loaded.scene.object_count(), 2);
        assert_eq!(loaded.scene.light_count(), 1);
        assert_eq!(loaded.scene.background(), BACKGROUND);
        assert_eq!(loaded.viewport.width(), 40);
        assert!(loaded.config.parallel);
    }

    #[test]
    fn test_optional_fields_default() {
        let file = SceneFile::from_json(
            r#"{ "width": 2, "height": 2,
                 "camera": { "origin": [0, 0, 0], "direction": [0, 0, -1], "horizontal_fov": 1.0 },
                 "background": [0, 0, 0] }"#,
        )
        .unwrap();

        let loaded = file.build().unwrap();
        assert_eq!(loaded.scene.object_count(), 0);
        assert_eq!(loaded.scene.background(), Color::ZERO);
        assert!(!loaded.config.parallel);
    }

    #[test]
    fn test_invalid_sphere_is_reported() {
        let file = SceneFile::from_json(
            r#"{ "width": 2, "height": 2,
                 "camera": { "origin": [0, 0, 0], "direction": [1, 0, 0], "horizontal_fov": 1.0 },
                 "spheres": [ { "center": [1, 0, 0], "radius": 0, "color": [1, 1, 1] } ] }"#,
        )
        .unwrap();

        assert!(matches!(
            file.build(),
            Err(SceneFileError::Invalid(RenderError::InvalidGeometry(_)))
        ));
    }

    #[test]
    fn test_invalid_checker_is_reported() {
        let file = SceneFile::from_json(
            r#"{ "width": 2, "height": 2,
                 "camera": { "origin": [0, 0, 0], "direction": [1, 0, 0], "horizontal_fov": 1.0 },
                 "spheres": [ { "center": [3, 0, 0], "radius": 1, "color": [1, 1, 1],
                                "checker": { "scale": 0, "color": [0, 0, 0] } } ] }"#,
        )
        .unwrap();

        assert!(matches!(
            file.build(),
            Err(SceneFileError::Invalid(RenderError::InvalidColorizer(_)))
        ));
    }

    #[test]
    fn test_camera_looking_up_is_reported() {
        let file = SceneFile::from_json(
            r#"{ "width": 2, "height": 2,
                 "camera": { "origin": [0, 0, 0], "direction": [0, 1, 0], "horizontal_fov": 1.0 } }"#,
        )
        .unwrap();

        assert!(matches!(
            file.build(),
            Err(SceneFileError::Invalid(RenderError::InvalidCamera(_)))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SceneFile::from_json("{ \"width\": 2 "),
            Err(SceneFileError::Json(_))
        ));
    }
}
