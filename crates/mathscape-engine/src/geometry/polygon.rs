use super::{GeometryError, Point};

/// Arity tag carried by a [`Polygon`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PolygonKind {
    /// Exactly 3 vertices.
    Tri,
    /// Exactly 4 vertices. Rects are quads.
    Quad,
    /// 3 or more vertices with no further constraint.
    General,
}

/// Closed polygon. Vertex order is the boundary winding order.
///
/// Invariants:
/// - at least 3 vertices
/// - `Tri` holds exactly 3, `Quad` exactly 4
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    kind: PolygonKind,
    points: Vec<Point>,
}

impl Polygon {
    pub const MIN_VERTICES: usize = 3;

    /// Builds a general polygon from at least 3 vertices.
    pub fn new(points: impl Into<Vec<Point>>) -> Result<Self, GeometryError> {
        let points = points.into();
        if points.len() < Self::MIN_VERTICES {
            return Err(GeometryError::TooFewVertices { found: points.len() });
        }
        Ok(Self { kind: PolygonKind::General, points })
    }

    #[inline]
    pub fn tri(p1: Point, p2: Point, p3: Point) -> Self {
        Self { kind: PolygonKind::Tri, points: vec![p1, p2, p3] }
    }

    #[inline]
    pub fn quad(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self { kind: PolygonKind::Quad, points: vec![p1, p2, p3, p4] }
    }

    /// Axis-aligned quad anchored at `p`.
    ///
    /// Corner order: top-left, top-right, bottom-right, bottom-left.
    pub fn rect(p: Point, w: f64, h: f64) -> Self {
        let p2 = Point::new(p.x + w, p.y);
        let p3 = Point::new(p2.x, p.y + h);
        let p4 = Point::new(p.x, p.y + h);
        Self::quad(p, p2, p3, p4)
    }

    #[inline]
    pub fn kind(&self) -> PolygonKind {
        self.kind
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn rect_corners_follow_winding_order() {
        let r = Polygon::rect(p(0.0, 0.0), 10.0, 20.0);
        assert_eq!(r.kind(), PolygonKind::Quad);
        assert_eq!(
            r.points(),
            &[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 20.0), p(0.0, 20.0)]
        );
    }

    #[test]
    fn rect_with_offset_anchor() {
        let r = Polygon::rect(p(-5.0, 2.0), 4.0, 3.0);
        assert_eq!(
            r.points(),
            &[p(-5.0, 2.0), p(-1.0, 2.0), p(-1.0, 5.0), p(-5.0, 5.0)]
        );
    }

    #[test]
    fn tri_and_quad_carry_their_arity() {
        let t = Polygon::tri(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        assert_eq!(t.kind(), PolygonKind::Tri);
        assert_eq!(t.vertex_count(), 3);

        let q = Polygon::quad(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0));
        assert_eq!(q.kind(), PolygonKind::Quad);
        assert_eq!(q.vertex_count(), 4);
    }

    #[test]
    fn general_polygon_rejects_fewer_than_three_points() {
        assert_eq!(
            Polygon::new(vec![p(0.0, 0.0), p(1.0, 1.0)]),
            Err(GeometryError::TooFewVertices { found: 2 })
        );
        let err = Polygon::new(Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "polygon needs at least 3 vertices, got 0");
    }

    #[test]
    fn general_polygon_keeps_insertion_order() {
        let pts = vec![p(0.0, 0.0), p(2.0, 0.0), p(3.0, 1.0), p(1.0, 2.0), p(-1.0, 1.0)];
        let poly = Polygon::new(pts.clone()).unwrap();
        assert_eq!(poly.kind(), PolygonKind::General);
        assert_eq!(poly.points(), pts.as_slice());
    }
}
