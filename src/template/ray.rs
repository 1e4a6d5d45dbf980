use crate::geometry::{Polygon, Segment};
use crate::math::{Point2, TOLERANCE, Vector2};
use crate::sweep::{Sector, SweepConfig};

use super::Template;

/// Half-thickness of the corridor a ray template occupies.
///
/// Scene units are assumed to be pixel-scale, where template distances run
/// in the hundreds; the corridor then approximates the hairline the host
/// draws for a ray. Hosts working in coarser units should scale their
/// distances rather than expect this to shrink with them.
pub(crate) const HALF_WIDTH: f64 = 1.0;

/// Overshoot added to the sweep radius so rays reach past the far cap.
const RADIUS_MARGIN: f64 = 2.0;

struct Corridor {
    near_left: Point2,
    near_right: Point2,
    far_left: Point2,
    far_right: Point2,
}

/// A ray is a degenerate rectangle: a corridor of width `2 * HALF_WIDTH`
/// along the direction vector, with the origin at the middle of its near
/// edge.
fn corridor(template: &Template) -> Corridor {
    let dir = Vector2::new(template.direction.cos(), template.direction.sin());
    let normal = Vector2::new(-dir.y, dir.x);
    let far = template.origin + dir * template.distance;
    Corridor {
        near_left: template.origin + normal * HALF_WIDTH,
        near_right: template.origin - normal * HALF_WIDTH,
        far_left: far + normal * HALF_WIDTH,
        far_right: far - normal * HALF_WIDTH,
    }
}

pub(crate) fn config(template: &Template) -> SweepConfig {
    // The corridor spans the forward half turn as seen from the origin; the
    // sector's boundary rays stop on the flanks' near endpoints, so no
    // synthetic segment may pass through the origin itself.
    let sector = Sector::from_direction(template.direction, 180.0);
    if template.distance <= TOLERANCE {
        return SweepConfig::within(sector, 0.0);
    }
    let c = corridor(template);
    let boundary = vec![
        Segment::new(c.near_right, c.far_right),
        Segment::new(c.far_right, c.far_left),
        Segment::new(c.far_left, c.near_left),
    ];
    SweepConfig::within(sector, template.distance + RADIUS_MARGIN).with_boundary(boundary)
}

pub(crate) fn nominal(template: &Template) -> Polygon {
    if template.distance <= TOLERANCE {
        return Polygon::empty();
    }
    let c = corridor(template);
    Polygon::new(vec![c.near_right, c.far_right, c.far_left, c.near_left])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::ShapeKind;

    fn east_ray(distance: f64) -> Template {
        Template::new(ShapeKind::Ray, Point2::origin(), distance)
    }

    #[test]
    fn config_bounds_the_corridor() {
        let cfg = config(&east_ray(10.0));
        assert_eq!(cfg.boundary.len(), 3);
        assert!((cfg.radius - 12.0).abs() < 1e-12);

        let far_cap = cfg.boundary[1];
        assert!((far_cap.a.x - 10.0).abs() < 1e-9);
        assert!((far_cap.b.x - 10.0).abs() < 1e-9);
        assert!((far_cap.a.y + HALF_WIDTH).abs() < 1e-9);
        assert!((far_cap.b.y - HALF_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn sector_faces_the_direction() {
        let t = east_ray(10.0).with_direction(1.2);
        let cfg = config(&t);
        let sector = cfg.sector.unwrap_or(Sector::from_direction(0.0, 0.0));
        assert!((sector.center() - 1.2).abs() < 1e-12);
        assert!((sector.width - 180.0).abs() < 1e-12);
    }

    #[test]
    fn nominal_is_a_thin_rectangle() {
        let poly = nominal(&east_ray(10.0));
        assert_eq!(poly.len(), 4);
        assert!((poly.signed_area() - 2.0 * HALF_WIDTH * 10.0).abs() < 1e-9);
        // The origin sits on the near edge.
        assert!(poly.contains(&Point2::origin()));
    }

    #[test]
    fn zero_distance_is_degenerate() {
        assert!(nominal(&east_ray(0.0)).is_empty());
        assert!(config(&east_ray(0.0)).radius.abs() < 1e-12);
    }
}
