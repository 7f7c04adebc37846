use anyhow::Result;

use crate::geometry::{Ellipse, Point};
use crate::render::RenderCtx;
use crate::surface::Surface;

/// Control-point distance for a quarter-ellipse cubic, as a fraction of the radius.
const KAPPA: f64 = 0.552_284_749_830_793_6;

/// Strokes the outline as four cubic Beziers.
///
/// The curve is built in logical space and every control point goes through the
/// mapper, which is affine, so the mapped curve is the mapped ellipse.
pub fn render<S: Surface + ?Sized>(ctx: &RenderCtx<'_>, surface: &mut S, ellipse: &Ellipse) -> Result<()> {
    ctx.apply_stroke(surface);

    let c = ellipse.center();
    let (rx, ry) = ellipse.radii();
    let (kx, ky) = (rx * KAPPA, ry * KAPPA);

    let start = ctx.map(Point::new(c.x + rx, c.y));
    surface.move_to(start.x, start.y);

    // Quarters: right -> bottom -> left -> top -> right (y-down).
    let quarters = [
        [(c.x + rx, c.y + ky), (c.x + kx, c.y + ry), (c.x, c.y + ry)],
        [(c.x - kx, c.y + ry), (c.x - rx, c.y + ky), (c.x - rx, c.y)],
        [(c.x - rx, c.y - ky), (c.x - kx, c.y - ry), (c.x, c.y - ry)],
        [(c.x + kx, c.y - ry), (c.x + rx, c.y - ky), (c.x + rx, c.y)],
    ];
    for [c1, c2, end] in quarters {
        let c1 = ctx.map(c1.into());
        let c2 = ctx.map(c2.into());
        let end = ctx.map(end.into());
        surface.curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
    }

    surface.close_path();
    surface.stroke()
}
