//! Simple ray casting example.
//!
//! Renders a few lit spheres and saves the normalized result to PPM format.

use prism_renderer::{
    display::ChannelRange, Camera, CheckerColorizer, Color, FlatColorizer, OpticalProperties,
    PointLight, RenderConfig, RenderResult, Scene, SphereGeometry, Vec3, Viewport,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Prism Ray Caster - Simple Example");
    println!("=================================");

    let scene = build_scene()?;
    println!(
        "Scene built: {} objects, {} lights",
        scene.object_count(),
        scene.light_count()
    );

    let camera = Camera::new(
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(1.0, -0.05, 0.0),
        70.0_f32.to_radians(),
    )?;
    let mut viewport = Viewport::new(800, 450);

    println!("Rendering {}x{}...", viewport.width(), viewport.height());

    let start = std::time::Instant::now();
    scene.render_with(&camera, &mut viewport, &RenderConfig { parallel: true });
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&viewport, filename)?;
    println!("Saved to {}", filename);
    Ok(())
}

fn build_scene() -> RenderResult<Scene> {
    let mut scene = Scene::new();

    // Ground
    scene.add_object(
        SphereGeometry::new(Vec3::new(6.0, -1000.0, 0.0), 999.0)?,
        CheckerColorizer::new(1.0, Color::new(0.9, 0.9, 0.9), Color::new(0.2, 0.2, 0.2))?,
        OpticalProperties::new(0.3, 0.7),
    );

    // Three main spheres
    scene.add_object(
        SphereGeometry::new(Vec3::new(6.0, 0.0, 0.0), 1.0)?,
        FlatColorizer::new(Color::new(1.0, 0.1, 0.1)),
        OpticalProperties::default(),
    );
    scene.add_object(
        SphereGeometry::new(Vec3::new(7.0, 0.0, -2.5), 1.0)?,
        FlatColorizer::new(Color::new(0.1, 0.8, 0.2)),
        OpticalProperties::new(0.4, 0.8),
    );
    scene.add_object(
        SphereGeometry::new(Vec3::new(7.0, 0.0, 2.5), 1.0)?,
        FlatColorizer::new(Color::new(0.2, 0.3, 1.0)),
        OpticalProperties::new(0.4, 0.8),
    );

    scene.add_light(
        PointLight::new(Vec3::new(3.0, 4.0, 1.0), Color::ONE, 30.0)
            .oriented()
            .clamped(),
    );
    scene.add_light(
        PointLight::new(Vec3::new(2.0, 1.0, -4.0), Color::new(1.0, 0.8, 0.6), 10.0)
            .oriented()
            .clamped(),
    );

    Ok(scene)
}

fn save_ppm(viewport: &Viewport, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", viewport.width(), viewport.height())?;
    writeln!(writer, "255")?;

    let range = ChannelRange::from_viewport(viewport);
    for row in 0..viewport.height() {
        for col in 0..viewport.width() {
            let rgba = range.color_to_rgba(viewport.get(col, row));
            writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
        }
    }

    Ok(())
}
