use anyhow::Result;

use crate::geometry::LineSegment;
use crate::render::RenderCtx;
use crate::surface::Surface;

/// Strokes a straight path from `p1` to `p2`.
pub fn render<S: Surface + ?Sized>(
    ctx: &RenderCtx<'_>,
    surface: &mut S,
    segment: &LineSegment,
) -> Result<()> {
    ctx.apply_stroke(surface);
    let p1 = ctx.map(segment.p1);
    let p2 = ctx.map(segment.p2);
    surface.move_to(p1.x, p1.y);
    surface.line_to(p2.x, p2.y);
    surface.stroke()
}
