//! mathscape engine crate.
//!
//! Renders planar geometry (points, lines, segments, polygons, ellipses, text)
//! onto vector surfaces. Shapes are described in a logical coordinate system
//! with a movable origin; the device maps them into the surface's unit square.
//!
//! ```no_run
//! use mathscape_engine::device::{Device, DeviceConfig};
//! use mathscape_engine::geometry::{Line, Point};
//! use mathscape_engine::surface::SurfaceFormat;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = DeviceConfig::new(400.0, 300.0, SurfaceFormat::Svg);
//! Device::scoped(&config, |device| {
//!     device.translate(200.0, 150.0);
//!     device.set_color(0.8, 0.1, 0.1, 1.0);
//!     device.draw(Line::new(0.5, 0.0))?;
//!     device.draw(Point::new(0.0, 0.0))?;
//!     Ok(())
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod coords;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod surface;

pub use device::{Device, DeviceConfig, DeviceError};
pub use render::DrawOutcome;
