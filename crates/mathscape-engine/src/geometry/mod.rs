//! Geometry model.
//!
//! Immutable value types in logical (untransformed) coordinates. Nothing here
//! knows about the output surface; the `coords` mapper converts to device space.

mod ellipse;
mod error;
mod line;
mod point;
mod polygon;

pub use ellipse::Ellipse;
pub use error::GeometryError;
pub use line::{Line, LineSegment, Ray, VERTICAL_EPSILON};
pub use point::Point;
pub use polygon::{Polygon, PolygonKind};

/// Closed set of drawable shapes.
///
/// Extending the model:
/// - add the value type in its own file under `geometry`
/// - add a variant here and to [`ShapeKind`]
/// - add a renderer under `render::shapes` and a match arm in `Device::draw`
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineSegment(LineSegment),
    Line(Line),
    Ray(Ray),
    Ellipse(Ellipse),
    Polygon(Polygon),
}

/// Payload-free tag of a [`Geometry`] variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Point,
    LineSegment,
    Line,
    Ray,
    Ellipse,
    Polygon,
}

impl Geometry {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Point(_) => ShapeKind::Point,
            Geometry::LineSegment(_) => ShapeKind::LineSegment,
            Geometry::Line(_) => ShapeKind::Line,
            Geometry::Ray(_) => ShapeKind::Ray,
            Geometry::Ellipse(_) => ShapeKind::Ellipse,
            Geometry::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// True when every coordinate, angle and extent is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Geometry::Point(p) => p.is_finite(),
            Geometry::LineSegment(s) => s.is_finite(),
            Geometry::Line(l) => l.is_finite(),
            Geometry::Ray(r) => r.is_finite(),
            Geometry::Ellipse(e) => e.is_finite(),
            Geometry::Polygon(p) => p.is_finite(),
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShapeKind::Point => "point",
            ShapeKind::LineSegment => "line segment",
            ShapeKind::Line => "line",
            ShapeKind::Ray => "ray",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

impl From<Point> for Geometry {
    fn from(v: Point) -> Self {
        Geometry::Point(v)
    }
}

impl From<LineSegment> for Geometry {
    fn from(v: LineSegment) -> Self {
        Geometry::LineSegment(v)
    }
}

impl From<Line> for Geometry {
    fn from(v: Line) -> Self {
        Geometry::Line(v)
    }
}

impl From<Ray> for Geometry {
    fn from(v: Ray) -> Self {
        Geometry::Ray(v)
    }
}

impl From<Ellipse> for Geometry {
    fn from(v: Ellipse) -> Self {
        Geometry::Ellipse(v)
    }
}

impl From<Polygon> for Geometry {
    fn from(v: Polygon) -> Self {
        Geometry::Polygon(v)
    }
}
