use crate::math::{Point2, Vector2};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb {
    /// Creates a box from two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: &Point2, b: &Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a square box of the given half-extent centred on `center`.
    #[must_use]
    pub fn around(center: &Point2, half_extent: f64) -> Self {
        let h = Vector2::new(half_extent, half_extent);
        Self {
            min: center - h,
            max: center + h,
        }
    }

    /// Whether two boxes overlap (touching counts).
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_order() {
        let b = Aabb::from_corners(&Point2::new(3.0, -1.0), &Point2::new(1.0, 4.0));
        assert!((b.min.x - 1.0).abs() < 1e-12);
        assert!((b.min.y + 1.0).abs() < 1e-12);
        assert!((b.max.x - 3.0).abs() < 1e-12);
        assert!((b.max.y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn around_is_centred_square() {
        let b = Aabb::around(&Point2::new(5.0, 5.0), 2.0);
        assert!((b.min.x - 3.0).abs() < 1e-12);
        assert!((b.max.y - 7.0).abs() < 1e-12);
    }

    #[test]
    fn overlap_detection() {
        let a = Aabb::around(&Point2::origin(), 1.0);
        let b = Aabb::around(&Point2::new(1.5, 0.0), 1.0);
        let c = Aabb::around(&Point2::new(5.0, 5.0), 1.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }
}
