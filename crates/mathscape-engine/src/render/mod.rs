//! Per-shape draw routines.
//!
//! Renderers read the mapper and render state through a [`RenderCtx`] and emit
//! path/paint calls on a [`Surface`](crate::surface::Surface). Coordinates reach
//! the surface already mapped into the unit square.

mod ctx;
pub mod shapes;

pub use ctx::RenderCtx;

use crate::geometry::ShapeKind;

/// Result of drawing one geometry value.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawOutcome {
    /// Operations were emitted to the surface.
    Drawn,
    /// The shape has no renderer; nothing was emitted.
    Unsupported(ShapeKind),
}

impl DrawOutcome {
    #[inline]
    pub fn is_drawn(self) -> bool {
        matches!(self, DrawOutcome::Drawn)
    }
}
