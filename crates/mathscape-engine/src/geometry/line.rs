use std::f64::consts::FRAC_PI_2;

use super::Point;

/// Tolerance used when deciding whether a [`Line`] is vertical.
pub const VERTICAL_EPSILON: f64 = 1e-12;

/// Infinite line `y = tan(theta) * x + c`.
///
/// `theta` is the slope angle in radians, nominally in `(-pi/2, pi/2]`.
/// For the vertical case (`theta == pi/2`) the intercept is reinterpreted and
/// the line sits at `x = -c`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Line {
    pub theta: f64,
    pub c: f64,
}

impl Line {
    #[inline]
    pub const fn new(theta: f64, c: f64) -> Self {
        Self { theta, c }
    }

    /// Vertical line through logical `x`.
    #[inline]
    pub const fn vertical(x: f64) -> Self {
        Self { theta: FRAC_PI_2, c: -x }
    }

    /// True when `theta` is `pi/2` within [`VERTICAL_EPSILON`].
    ///
    /// Decided on the angle itself; `tan` near `pi/2` is not comparable.
    /// Angles outside `(-pi/2, pi/2]` are not reduced: `-pi/2` or `3pi/2`
    /// take the sloped branch and produce a near-vertical line through `(0, c)`.
    pub fn is_vertical(&self) -> bool {
        (self.theta - FRAC_PI_2).abs() <= VERTICAL_EPSILON
    }

    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.c.is_finite()
    }
}

/// Segment between two points. Direction only matters for path emission.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

impl LineSegment {
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn is_finite(&self) -> bool {
        self.p1.is_finite() && self.p2.is_finite()
    }
}

/// Half-line starting at `p` heading along `theta` (radians).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ray {
    pub p: Point,
    pub theta: f64,
}

impl Ray {
    #[inline]
    pub const fn new(p: Point, theta: f64) -> Self {
        Self { p, theta }
    }

    pub fn is_finite(&self) -> bool {
        self.p.is_finite() && self.theta.is_finite()
    }
}
