use anyhow::Result;

use crate::coords::Mapper;
use crate::geometry::{Line, LineSegment, Point};
use crate::render::RenderCtx;
use crate::surface::Surface;

use super::segment;

/// Clips an infinite line to the visible logical window.
///
/// Sloped lines span the full visible x-range. Vertical lines span the full
/// visible y-range at `x = -c`; `cot(pi/2)` is zero, so no trigonometry is
/// evaluated on that branch.
pub fn clip(mapper: &Mapper, line: &Line) -> LineSegment {
    if line.is_vertical() {
        let (y1, y2) = mapper.y_range();
        let x = -line.c;
        LineSegment::new(Point::new(x, y1), Point::new(x, y2))
    } else {
        let m = line.theta.tan();
        let (x1, x2) = mapper.x_range();
        LineSegment::new(Point::new(x1, m * x1 + line.c), Point::new(x2, m * x2 + line.c))
    }
}

pub fn render<S: Surface + ?Sized>(ctx: &RenderCtx<'_>, surface: &mut S, line: &Line) -> Result<()> {
    let clipped = clip(ctx.mapper, line);
    segment::render(ctx, surface, &clipped)
}
