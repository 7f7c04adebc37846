//! Backend surfaces.
//!
//! A [`Surface`] owns the output artifact and exposes the low-level path and
//! paint operations the drawing engine emits. Coordinates handed to a surface
//! are user-space values; the device installs a `scale(width, height)` once so
//! that the unit square covers the whole page.
//!
//! Implementations:
//! - [`CairoSurface`]: cairo's PDF, PostScript and SVG file surfaces
//! - [`RecordingSurface`]: keeps every call as a [`SurfaceOp`] (tests, replay)

mod cairo_surface;
mod recording;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use crate::device::DeviceError;
use crate::paint::Color;

pub use cairo_surface::CairoSurface;
pub use recording::{RecordingSurface, SurfaceOp};

/// Output file format. Closed set.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SurfaceFormat {
    Pdf,
    Ps,
    #[default]
    Svg,
}

impl SurfaceFormat {
    pub const ALL: [SurfaceFormat; 3] = [SurfaceFormat::Pdf, SurfaceFormat::Ps, SurfaceFormat::Svg];

    /// File extension without the leading dot.
    #[inline]
    pub const fn extension(self) -> &'static str {
        match self {
            SurfaceFormat::Pdf => "pdf",
            SurfaceFormat::Ps => "ps",
            SurfaceFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for SurfaceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for SurfaceFormat {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(SurfaceFormat::Pdf),
            "ps" | "postscript" => Ok(SurfaceFormat::Ps),
            "svg" => Ok(SurfaceFormat::Svg),
            _ => Err(DeviceError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Drawing context bound to one output target.
///
/// Mirrors the small subset of a cairo context the engine needs. Path
/// construction is infallible; painting and finishing may fail in backends that
/// write eagerly.
pub trait Surface {
    /// Post-multiplies the user-space transform by a scale.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Sets the paint color. Components are passed through unclamped.
    fn set_source_rgba(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64);

    fn close_path(&mut self);

    /// Adds a circular arc, clockwise in a y-down space, from `angle1` to `angle2`.
    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64);

    /// Strokes and clears the current path.
    fn stroke(&mut self) -> Result<()>;

    /// Fills and clears the current path.
    fn fill(&mut self) -> Result<()>;

    fn select_font_face(&mut self, family: &str);

    fn set_font_size(&mut self, size: f64);

    /// Draws `text` with its baseline origin at the current point.
    fn show_text(&mut self, text: &str) -> Result<()>;

    /// Flushes everything emitted so far to the destination and closes it.
    ///
    /// Calling it again is a no-op.
    fn finish(&mut self) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn scale(&mut self, sx: f64, sy: f64) {
        (**self).scale(sx, sy)
    }

    fn set_source_rgba(&mut self, color: Color) {
        (**self).set_source_rgba(color)
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width)
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        (**self).curve_to(x1, y1, x2, y2, x3, y3)
    }

    fn close_path(&mut self) {
        (**self).close_path()
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        (**self).arc(xc, yc, radius, angle1, angle2)
    }

    fn stroke(&mut self) -> Result<()> {
        (**self).stroke()
    }

    fn fill(&mut self) -> Result<()> {
        (**self).fill()
    }

    fn select_font_face(&mut self, family: &str) {
        (**self).select_font_face(family)
    }

    fn set_font_size(&mut self, size: f64) {
        (**self).set_font_size(size)
    }

    fn show_text(&mut self, text: &str) -> Result<()> {
        (**self).show_text(text)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
