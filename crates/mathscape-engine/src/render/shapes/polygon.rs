use anyhow::Result;

use crate::geometry::Polygon;
use crate::render::RenderCtx;
use crate::surface::Surface;

/// Strokes the closed outline in vertex order.
pub fn render<S: Surface + ?Sized>(ctx: &RenderCtx<'_>, surface: &mut S, polygon: &Polygon) -> Result<()> {
    ctx.apply_stroke(surface);
    let mut points = polygon.points().iter().map(|p| ctx.map(*p));
    if let Some(first) = points.next() {
        surface.move_to(first.x, first.y);
    }
    for p in points {
        surface.line_to(p.x, p.y);
    }
    surface.close_path();
    surface.stroke()
}
