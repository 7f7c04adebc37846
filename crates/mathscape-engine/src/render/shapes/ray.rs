use crate::geometry::{Ray, ShapeKind};
use crate::render::DrawOutcome;

/// Rays have no rendering rule yet; nothing is emitted.
// TODO: decide how a ray clips against the visible window, then stroke it like `line::render`.
pub fn render(ray: &Ray) -> DrawOutcome {
    log::debug!("ray at ({}, {}) not rendered: rays are not supported", ray.p.x, ray.p.y);
    DrawOutcome::Unsupported(ShapeKind::Ray)
}
