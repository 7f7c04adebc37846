use std::f64::consts::TAU;

use anyhow::Result;

use crate::geometry::Point;
use crate::render::RenderCtx;
use crate::surface::Surface;

/// Fills a disc at `p` whose radius is the current stroke width.
pub fn render<S: Surface + ?Sized>(ctx: &RenderCtx<'_>, surface: &mut S, p: &Point) -> Result<()> {
    let center = ctx.map(*p);
    ctx.apply_color(surface);
    surface.arc(center.x, center.y, ctx.state.stroke(), 0.0, TAU);
    surface.fill()
}
