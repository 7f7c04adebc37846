use std::f64::consts::{FRAC_PI_2, PI};

use anyhow::{Context, Result};
use mathscape_engine::device::{Device, DeviceConfig};
use mathscape_engine::geometry::{Ellipse, Line, LineSegment, Point, Polygon, Ray};
use mathscape_engine::logging::{init_logging, LoggingConfig};
use mathscape_engine::surface::{Surface, SurfaceFormat};
use mathscape_engine::DrawOutcome;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 400.0;

/// Usage: `mathscape-studio [pdf|ps|svg] [output-path]`
fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let format = match args.next() {
        Some(arg) => arg.parse::<SurfaceFormat>()?,
        None => SurfaceFormat::default(),
    };
    let mut config = DeviceConfig::new(WIDTH, HEIGHT, format);
    if let Some(output) = args.next() {
        config = config.with_output(output);
    }

    Device::scoped(&config, draw_scene)
        .with_context(|| format!("failed to render {}", config.output.display()))?;

    log::info!("wrote {}", config.output.display());
    Ok(())
}

/// Axes through the page center, a pencil of lines, and a few labelled shapes.
fn draw_scene<S: Surface>(device: &mut Device<S>) -> Result<()> {
    device.translate(WIDTH / 2.0, HEIGHT / 2.0);

    // Axes.
    device.set_color(0.6, 0.6, 0.6, 1.0);
    device.set_stroke(1.0);
    device.draw(Line::new(0.0, 0.0))?;
    device.draw(Line::new(FRAC_PI_2, 0.0))?;

    // Pencil of lines through (0, 40).
    for i in 1..8 {
        let theta = -FRAC_PI_2 + PI * i as f64 / 8.0;
        let shade = i as f64 / 8.0;
        device.set_color(shade, 0.2, 1.0 - shade, 0.6);
        device.draw(Line::new(theta, 40.0))?;
    }

    device.set_color(0.1, 0.1, 0.1, 1.0);
    device.draw(LineSegment::new(Point::new(-250.0, 150.0), Point::new(-150.0, 100.0)))?;
    device.draw(Polygon::rect(Point::new(120.0, -160.0), 120.0, 60.0))?;
    device.draw(Polygon::tri(
        Point::new(-240.0, -60.0),
        Point::new(-160.0, -60.0),
        Point::new(-200.0, -140.0),
    ))?;
    device.draw(Ellipse::new(Point::new(120.0, 80.0), 140.0, 70.0))?;

    device.set_color(0.85, 0.1, 0.1, 1.0);
    device.set_stroke(3.0);
    for p in [Point::new(0.0, 0.0), Point::new(0.0, 40.0), Point::new(-200.0, -60.0)] {
        device.draw(p)?;
    }

    if let DrawOutcome::Unsupported(kind) = device.draw(Ray::new(Point::new(0.0, 0.0), 0.5))? {
        log::info!("skipped {kind}: no renderer");
    }

    device.set_color(0.0, 0.0, 0.0, 1.0);
    device.set_text_size(14.0);
    device.text("y = tan(theta) x + 40", Point::new(10.0, 30.0))?;
    device.set_text_size(10.0);
    device.text("origin", Point::new(6.0, -6.0))?;
    Ok(())
}
