use super::{Point2, Vector2, TOLERANCE};

/// Intersection of the ray `origin + t * dir` (`t >= 0`) with the segment
/// from `a` to `b`.
///
/// Returns `(intersection_point, t)`. With a unit-length `dir`, `t` is the
/// distance from the origin to the hit. Endpoints of the segment count as
/// hits.
#[must_use]
pub fn ray_segment_intersect_2d(
    origin: &Point2,
    dir: &Vector2,
    a: &Point2,
    b: &Point2,
) -> Option<(Point2, f64)> {
    let seg = b - a;

    let cross = dir.x * seg.y - dir.y * seg.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = a.x - origin.x;
    let dy = a.y - origin.y;
    let t = (dx * seg.y - dy * seg.x) / cross;
    let u = (dx * dir.y - dy * dir.x) / cross;

    // Use a small epsilon to include the segment endpoints.
    let eps = TOLERANCE;
    if t >= -eps && u >= -eps && u <= 1.0 + eps {
        let t = t.max(0.0);
        Some((origin + dir * t, t))
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_perpendicular_segment() {
        let origin = Point2::origin();
        let dir = Vector2::new(1.0, 0.0);
        let a = Point2::new(2.0, -1.0);
        let b = Point2::new(2.0, 1.0);
        let (pt, t) = ray_segment_intersect_2d(&origin, &dir, &a, &b).unwrap();
        assert!((pt.x - 2.0).abs() < TOLERANCE);
        assert!(pt.y.abs() < TOLERANCE);
        assert!((t - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn ray_misses_segment_behind_origin() {
        let origin = Point2::origin();
        let dir = Vector2::new(1.0, 0.0);
        let a = Point2::new(-2.0, -1.0);
        let b = Point2::new(-2.0, 1.0);
        assert!(ray_segment_intersect_2d(&origin, &dir, &a, &b).is_none());
    }

    #[test]
    fn ray_misses_segment_to_the_side() {
        let origin = Point2::origin();
        let dir = Vector2::new(1.0, 0.0);
        let a = Point2::new(2.0, 1.0);
        let b = Point2::new(2.0, 3.0);
        assert!(ray_segment_intersect_2d(&origin, &dir, &a, &b).is_none());
    }

    #[test]
    fn ray_parallel_to_segment_returns_none() {
        let origin = Point2::origin();
        let dir = Vector2::new(1.0, 0.0);
        let a = Point2::new(0.0, 1.0);
        let b = Point2::new(5.0, 1.0);
        assert!(ray_segment_intersect_2d(&origin, &dir, &a, &b).is_none());
    }

    #[test]
    fn ray_hits_segment_endpoint() {
        let origin = Point2::origin();
        let dir = Vector2::new(1.0, 0.0);
        let a = Point2::new(3.0, 0.0);
        let b = Point2::new(3.0, 2.0);
        let (pt, t) = ray_segment_intersect_2d(&origin, &dir, &a, &b).unwrap();
        assert!((pt.x - 3.0).abs() < TOLERANCE);
        assert!((t - 3.0).abs() < TOLERANCE);
    }
}
