use crate::coords::Mapper;
use crate::geometry::Point;
use crate::paint::RenderState;
use crate::surface::Surface;

/// Read-only view of the device state a renderer needs.
#[derive(Debug, Copy, Clone)]
pub struct RenderCtx<'a> {
    pub mapper: &'a Mapper,
    pub state: &'a RenderState,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(mapper: &'a Mapper, state: &'a RenderState) -> Self {
        Self { mapper, state }
    }

    #[inline]
    pub fn map(&self, p: Point) -> Point {
        self.mapper.map_point(p)
    }

    /// Applies the current color to the surface.
    #[inline]
    pub fn apply_color<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_source_rgba(self.state.color());
    }

    /// Applies the current color and stroke width to the surface.
    #[inline]
    pub fn apply_stroke<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.apply_color(surface);
        surface.set_line_width(self.state.stroke());
    }
}
