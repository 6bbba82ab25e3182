//! Prism viewer: renders a scene and writes the normalized image to PNG.
//!
//! Usage: prism_viewer [scene.json] [output.png]

mod scene_file;

use anyhow::{Context, Result};
use prism_renderer::{
    to_rgba, Camera, Color, FlatColorizer, OpticalProperties, PointLight, RenderConfig, Scene,
    SphereGeometry, Vec3, Viewport,
};
use scene_file::{LoadedScene, SceneFile};
use std::env;

const DEFAULT_OUTPUT: &str = "render.png";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (scene_path, output) = match args.len() {
        1 => (None, DEFAULT_OUTPUT.to_string()),
        2 if args[1].ends_with(".png") => (None, args[1].clone()),
        2 => (Some(args[1].clone()), DEFAULT_OUTPUT.to_string()),
        _ => (Some(args[1].clone()), args[2].clone()),
    };

    let loaded = match scene_path {
        Some(path) => {
            log::info!("Loading scene {}", path);
            SceneFile::load(&path)
                .and_then(|file| file.build())
                .with_context(|| format!("Failed to load scene {}", path))?
        }
        None => {
            log::info!("No scene file given, rendering the demo scene");
            demo_scene()?
        }
    };

    let LoadedScene {
        scene,
        camera,
        mut viewport,
        config,
    } = loaded;

    scene.render_with(&camera, &mut viewport, &config);

    if let Some((min, max)) = viewport.min_max() {
        log::info!("Channel range [{}, {}]", min, max);
    }

    let rgba = to_rgba(&viewport);
    let image = image::RgbaImage::from_raw(viewport.width(), viewport.height(), rgba)
        .context("RGBA buffer does not match viewport size")?;
    image
        .save(&output)
        .with_context(|| format!("Failed to write {}", output))?;

    log::info!("Saved {}", output);
    Ok(())
}

/// A white sphere two units down +x, a red one behind it and a light above.
fn demo_scene() -> Result<LoadedScene> {
    let camera = Camera::new(Vec3::ZERO, Vec3::X, 0.8)?;
    let viewport = Viewport::new(1024, 768);

    let mut scene = Scene::new();
    scene.add_object(
        SphereGeometry::new(Vec3::new(2.0, 0.0, 0.0), 1.0)?,
        FlatColorizer::new(Color::ONE),
        OpticalProperties::default(),
    );
    scene.add_object(
        SphereGeometry::new(Vec3::new(6.0, 1.0, 2.5), 1.5)?,
        FlatColorizer::new(Color::new(1.0, 0.0, 0.0)),
        OpticalProperties::new(0.6, 0.8),
    );
    scene.add_light(
        PointLight::new(Vec3::new(0.0, 3.0, -1.0), Color::ONE, 6.0)
            .oriented()
            .clamped(),
    );

    Ok(LoadedScene {
        scene,
        camera,
        viewport,
        config: RenderConfig { parallel: true },
    })
}
