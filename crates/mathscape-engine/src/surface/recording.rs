use anyhow::Result;

use crate::geometry::Point;
use crate::paint::Color;

use super::Surface;

/// One recorded surface call. Points are user-space (unit-square) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Scale { sx: f64, sy: f64 },
    SetSourceRgba(Color),
    SetLineWidth(f64),
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    ClosePath,
    Arc { center: Point, radius: f64, angle1: f64, angle2: f64 },
    Stroke,
    Fill,
    SelectFontFace(String),
    SetFontSize(f64),
    ShowText(String),
    Finish,
}

/// Surface that stores calls instead of painting them.
///
/// Replaying [`ops`](Self::ops) onto another surface reproduces the drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    finished: bool,
}

impl RecordingSurface {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns calls in emission order.
    #[inline]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drops recorded calls. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Last color set through `set_source_rgba`, if any.
    pub fn last_color(&self) -> Option<Color> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::SetSourceRgba(c) => Some(*c),
            _ => None,
        })
    }

    /// Replays every recorded call except `Finish` onto `target`.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) -> Result<()> {
        for op in &self.ops {
            match op {
                SurfaceOp::Scale { sx, sy } => target.scale(*sx, *sy),
                SurfaceOp::SetSourceRgba(c) => target.set_source_rgba(*c),
                SurfaceOp::SetLineWidth(w) => target.set_line_width(*w),
                SurfaceOp::MoveTo(p) => target.move_to(p.x, p.y),
                SurfaceOp::LineTo(p) => target.line_to(p.x, p.y),
                SurfaceOp::CurveTo(c1, c2, p) => target.curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
                SurfaceOp::ClosePath => target.close_path(),
                SurfaceOp::Arc { center, radius, angle1, angle2 } => {
                    target.arc(center.x, center.y, *radius, *angle1, *angle2)
                }
                SurfaceOp::Stroke => target.stroke()?,
                SurfaceOp::Fill => target.fill()?,
                SurfaceOp::SelectFontFace(family) => target.select_font_face(family),
                SurfaceOp::SetFontSize(size) => target.set_font_size(*size),
                SurfaceOp::ShowText(text) => target.show_text(text)?,
                SurfaceOp::Finish => {}
            }
        }
        Ok(())
    }

    #[inline]
    fn push(&mut self, op: SurfaceOp) {
        self.ops.push(op);
    }
}

impl Surface for RecordingSurface {
    fn scale(&mut self, sx: f64, sy: f64) {
        self.push(SurfaceOp::Scale { sx, sy });
    }

    fn set_source_rgba(&mut self, color: Color) {
        self.push(SurfaceOp::SetSourceRgba(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(SurfaceOp::SetLineWidth(width));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(SurfaceOp::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(SurfaceOp::LineTo(Point::new(x, y)));
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.push(SurfaceOp::CurveTo(
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(x3, y3),
        ));
    }

    fn close_path(&mut self) {
        self.push(SurfaceOp::ClosePath);
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.push(SurfaceOp::Arc { center: Point::new(xc, yc), radius, angle1, angle2 });
    }

    fn stroke(&mut self) -> Result<()> {
        self.push(SurfaceOp::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        self.push(SurfaceOp::Fill);
        Ok(())
    }

    fn select_font_face(&mut self, family: &str) {
        self.push(SurfaceOp::SelectFontFace(family.to_string()));
    }

    fn set_font_size(&mut self, size: f64) {
        self.push(SurfaceOp::SetFontSize(size));
    }

    fn show_text(&mut self, text: &str) -> Result<()> {
        self.push(SurfaceOp::ShowText(text.to_string()));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.finished {
            self.finished = true;
            self.push(SurfaceOp::Finish);
        }
        Ok(())
    }
}
