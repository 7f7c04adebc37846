use anyhow::Result;

use crate::geometry::Point;
use crate::render::RenderCtx;
use crate::surface::Surface;

/// Shows `txt` with its baseline origin at `loc`.
///
/// No measurement, wrapping or alignment.
pub fn render<S: Surface + ?Sized>(ctx: &RenderCtx<'_>, surface: &mut S, txt: &str, loc: Point) -> Result<()> {
    ctx.apply_color(surface);
    surface.select_font_face(ctx.state.font_family());
    surface.set_font_size(ctx.state.text_size());
    let at = ctx.map(loc);
    surface.move_to(at.x, at.y);
    surface.show_text(txt)
}
