use crate::math::{Point2, Vector2, TOLERANCE};

/// A simple polygon as an ordered vertex list, counter-clockwise winding.
///
/// An empty vertex list is a valid, degenerate polygon; it is how the shape
/// engine reports "nothing visible" rather than failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from a vertex list.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Creates the empty (degenerate) polygon.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns a copy of the polygon with `offset` added to every vertex.
    /// The input polygon is left untouched.
    #[must_use]
    pub fn translated(&self, offset: Vector2) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v + offset).collect(),
        }
    }

    /// Signed area via the shoelace formula.
    ///
    /// Positive for counter-clockwise, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += self.vertices[i].x * self.vertices[j].y
                - self.vertices[j].x * self.vertices[i].y;
        }
        sum * 0.5
    }

    /// Even-odd point-in-polygon test. Points on an edge count as inside
    /// within the global tolerance.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        // Points on the boundary first, the crossing count is unreliable there.
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if point_on_segment(point, &a, &b) {
                return true;
            }
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > point.y) != (vj.y > point.y) {
                let x_cross = vj.x + (point.y - vj.y) / (vi.y - vj.y) * (vi.x - vj.x);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

fn point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return (p - a).norm() < TOLERANCE;
    }
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm() < TOLERANCE * 100.0
}
