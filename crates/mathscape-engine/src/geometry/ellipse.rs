use super::Point;

/// Axis-aligned ellipse inscribed in the box anchored at its top-left corner `p`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ellipse {
    pub p: Point,
    pub w: f64,
    pub h: f64,
}

impl Ellipse {
    #[inline]
    pub const fn new(p: Point, w: f64, h: f64) -> Self {
        Self { p, w, h }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.p.x + self.w / 2.0, self.p.y + self.h / 2.0)
    }

    /// Semi-axes `(rx, ry)`.
    #[inline]
    pub fn radii(&self) -> (f64, f64) {
        (self.w / 2.0, self.h / 2.0)
    }

    pub fn is_finite(&self) -> bool {
        self.p.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}
