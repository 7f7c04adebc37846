use crate::device::DeviceError;
use crate::geometry::Point;

use super::Viewport;

/// Linear interpolation from `[start1, stop1]` onto `[start2, stop2]`.
#[inline]
pub fn map(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}

/// Converts logical coordinates into the unit-square device space.
///
/// The visible logical window is `[-origin.x, width - origin.x]` horizontally and
/// `[-origin.y, height - origin.y]` vertically; both map onto `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mapper {
    viewport: Viewport,
    origin: Point,
}

impl Mapper {
    pub fn new(viewport: Viewport) -> Result<Self, DeviceError> {
        if !viewport.is_valid() {
            return Err(DeviceError::InvalidDimensions {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self { viewport, origin: Point::zero() })
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.viewport.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.viewport.height
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Shifts the logical origin. Offsets accumulate without bounds.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.x += dx;
        self.origin.y += dy;
    }

    /// Visible logical range on the x-axis.
    #[inline]
    pub fn x_range(&self) -> (f64, f64) {
        (-self.origin.x, self.viewport.width - self.origin.x)
    }

    /// Visible logical range on the y-axis.
    #[inline]
    pub fn y_range(&self) -> (f64, f64) {
        (-self.origin.y, self.viewport.height - self.origin.y)
    }

    #[inline]
    pub fn map_x(&self, x: f64) -> f64 {
        let (start, stop) = self.x_range();
        map(x, start, stop, 0.0, 1.0)
    }

    #[inline]
    pub fn map_y(&self, y: f64) -> f64 {
        let (start, stop) = self.y_range();
        map(y, start, stop, 0.0, 1.0)
    }

    /// Converts a logical length to device units. Scale only; the origin is ignored.
    #[inline]
    pub fn scale_x(&self, len: f64) -> f64 {
        len / self.viewport.width
    }

    #[inline]
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(self.map_x(p.x), self.map_y(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(w: f64, h: f64) -> Mapper {
        Mapper::new(Viewport::new(w, h)).unwrap()
    }

    #[test]
    fn map_is_range_to_range_interpolation() {
        assert_eq!(map(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        assert_eq!(map(0.0, -1.0, 1.0, 10.0, 20.0), 15.0);
        assert_eq!(map(3.0, 2.0, 4.0, 1.0, 0.0), 0.5);
    }

    #[test]
    fn visible_bounds_map_to_unit_interval_exactly() {
        let mut m = mapper(640.0, 480.0);
        for (dx, dy) in [(0.0, 0.0), (13.7, -2.25), (-400.1, 999.9), (0.1, 0.2)] {
            m.translate(dx, dy);
            let o = m.origin();
            assert_eq!(m.map_x(-o.x), 0.0);
            assert_eq!(m.map_x(640.0 - o.x), 1.0);
            assert_eq!(m.map_y(-o.y), 0.0);
            assert_eq!(m.map_y(480.0 - o.y), 1.0);
        }
    }

    #[test]
    fn map_x_is_monotonic_inside_visible_range() {
        let mut m = mapper(200.0, 100.0);
        m.translate(37.5, 0.0);
        let (start, stop) = m.x_range();

        let mut prev = f64::NEG_INFINITY;
        for i in 0..=100 {
            let x = start + (stop - start) * (i as f64 / 100.0);
            let v = m.map_x(x);
            assert!((0.0..=1.0).contains(&v), "map_x({x}) = {v}");
            assert!(v > prev);
            prev = v;
        }
    }

    #[test]
    fn translate_composes_additively() {
        let mut stepwise = mapper(100.0, 100.0);
        stepwise.translate(10.0, -4.0);
        stepwise.translate(2.5, 6.0);

        let mut single = mapper(100.0, 100.0);
        single.translate(12.5, 2.0);

        assert_eq!(stepwise.origin(), single.origin());
        for v in [-50.0, 0.0, 12.5, 99.0] {
            assert_eq!(stepwise.map_x(v), single.map_x(v));
            assert_eq!(stepwise.map_y(v), single.map_y(v));
        }
    }

    #[test]
    fn translated_origin_maps_to_its_offset() {
        let mut m = mapper(100.0, 50.0);
        m.translate(50.0, 25.0);
        assert_eq!(m.map_point(Point::zero()), Point::new(0.5, 0.5));
    }

    #[test]
    fn scale_x_ignores_origin() {
        let mut m = mapper(200.0, 100.0);
        m.translate(40.0, 10.0);
        assert_eq!(m.scale_x(5.0), 5.0 / 200.0);
    }

    #[test]
    fn rejects_degenerate_viewport() {
        assert!(Mapper::new(Viewport::new(0.0, 10.0)).is_err());
        assert!(Mapper::new(Viewport::new(10.0, -10.0)).is_err());
    }
}
