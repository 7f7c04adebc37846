//! cairo-backed file surface.

use std::path::Path;

use anyhow::{Context as _, Result};
use cairo::{Context, FontSlant, FontWeight, PdfSurface, PsSurface, SvgSurface};

use crate::coords::Viewport;
use crate::paint::Color;

use super::{Surface, SurfaceFormat};

/// Adapter forwarding surface calls to a cairo context bound to a file surface.
///
/// The file is created on [`create`](Self::create); cairo streams into it and
/// the document is completed by [`finish`](Surface::finish).
pub struct CairoSurface {
    ctx: Context,
    format: SurfaceFormat,
    finished: bool,
}

impl CairoSurface {
    /// Creates `path` as a `width` x `height` point page in `format`.
    ///
    /// Dimensions are checked before the file is touched.
    pub fn create(path: impl AsRef<Path>, width: f64, height: f64, format: SurfaceFormat) -> Result<Self> {
        let path = path.as_ref();
        Viewport::validated(width, height)?;

        let ctx = match format {
            SurfaceFormat::Pdf => PdfSurface::new(width, height, path).and_then(|s| Context::new(&s)),
            SurfaceFormat::Ps => PsSurface::new(width, height, path).and_then(|s| Context::new(&s)),
            SurfaceFormat::Svg => SvgSurface::new(width, height, Some(path)).and_then(|s| Context::new(&s)),
        }
        .with_context(|| format!("failed to create {format} output {}", path.display()))?;

        Ok(Self { ctx, format, finished: false })
    }

    #[inline]
    pub fn format(&self) -> SurfaceFormat {
        self.format
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Surface for CairoSurface {
    fn scale(&mut self, sx: f64, sy: f64) {
        self.ctx.scale(sx, sy);
    }

    fn set_source_rgba(&mut self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.ctx.curve_to(x1, y1, x2, y2, x3, y3);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.ctx.arc(xc, yc, radius, angle1, angle2);
    }

    fn stroke(&mut self) -> Result<()> {
        self.ctx.stroke().context("cairo stroke failed")
    }

    fn fill(&mut self) -> Result<()> {
        self.ctx.fill().context("cairo fill failed")
    }

    fn select_font_face(&mut self, family: &str) {
        self.ctx.select_font_face(family, FontSlant::Normal, FontWeight::Normal);
    }

    fn set_font_size(&mut self, size: f64) {
        self.ctx.set_font_size(size);
    }

    fn show_text(&mut self, text: &str) -> Result<()> {
        self.ctx.show_text(text).context("cairo show_text failed")
    }

    fn finish(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        // Flush pending drawing before the file trailer is written.
        let target = self.ctx.target();
        target.flush();
        target.finish();
        self.ctx.status().context("cairo context error while finishing")?;
        target
            .status()
            .with_context(|| format!("cairo failed to write {} output", self.format))?;
        log::debug!("finished {} output", self.format);
        Ok(())
    }
}
