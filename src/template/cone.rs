use crate::geometry::{Polygon, Segment};
use crate::math::{angle, TOLERANCE};
use crate::scene::ConeStyle;
use crate::sweep::{Sector, SweepConfig, DEFAULT_DENSITY};

use super::Template;

/// Cone width, in degrees, used when a template leaves its angle unset.
pub const DEFAULT_CONE_WIDTH: f64 = 90.0;

/// Overshoot added to the sweep radius of a flat cone so rays reach past
/// the synthetic chord instead of stopping just short of it. A tolerance
/// for the sweep's rounding, not a geometric quantity.
const RADIUS_MARGIN: f64 = 2.0;

pub(crate) fn effective_width(width: f64) -> f64 {
    if width <= TOLERANCE {
        DEFAULT_CONE_WIDTH
    } else {
        width.min(360.0)
    }
}

/// Distance to a flat cone's flank tips: the chord between the flanks at
/// `distance / cos(width/2)` passes through the nominal distance point.
/// `None` for cones of a half turn or wider, where no closing chord exists.
fn flat_reach(distance: f64, width: f64) -> Option<f64> {
    let cos_half = (width / 2.0).to_radians().cos();
    if cos_half <= TOLERANCE {
        None
    } else {
        Some(distance / cos_half)
    }
}

pub(crate) fn config(template: &Template, style: ConeStyle) -> SweepConfig {
    let width = effective_width(template.angle);
    let sector = Sector::from_direction(template.direction, width);
    if template.distance <= TOLERANCE {
        return SweepConfig::within(sector, 0.0);
    }
    match (style, flat_reach(template.distance, width)) {
        (ConeStyle::Flat, Some(reach)) => {
            let half = sector.width_radians() / 2.0;
            let a = angle::polar(&template.origin, template.direction - half, reach);
            let b = angle::polar(&template.origin, template.direction + half, reach);
            SweepConfig::within(sector, reach + RADIUS_MARGIN)
                .with_boundary(vec![Segment::new(a, b)])
        }
        // Round style, and flat cones too wide for a chord.
        _ => SweepConfig::within(sector, template.distance),
    }
}

pub(crate) fn nominal(template: &Template, style: ConeStyle) -> Polygon {
    if template.distance <= TOLERANCE {
        return Polygon::empty();
    }
    let width = effective_width(template.angle);
    let sector = Sector::from_direction(template.direction, width);
    let half = sector.width_radians() / 2.0;

    if let (ConeStyle::Flat, Some(reach)) = (style, flat_reach(template.distance, width)) {
        return Polygon::new(vec![
            template.origin,
            angle::polar(&template.origin, template.direction - half, reach),
            angle::polar(&template.origin, template.direction + half, reach),
        ]);
    }

    // Round wedge: origin plus the arc, sampled like the engine's sector
    // sweep so a wall-free constrained cone matches the nominal one.
    let steps = sector.sample_count(DEFAULT_DENSITY);
    let start = sector.center() - half;
    let step = sector.width_radians() / steps as f64;
    let mut vertices = Vec::with_capacity(steps + 2);
    vertices.push(template.origin);
    for i in 0..=steps {
        vertices.push(angle::polar(
            &template.origin,
            start + i as f64 * step,
            template.distance,
        ));
    }
    Polygon::new(vertices)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point2;
    use crate::template::ShapeKind;

    fn cone(distance: f64) -> Template {
        Template::new(ShapeKind::Cone, Point2::origin(), distance)
    }

    #[test]
    fn unset_width_defaults_to_90_degrees() {
        assert!((effective_width(0.0) - 90.0).abs() < 1e-12);
        assert!((effective_width(-3.0) - 90.0).abs() < 1e-12);
        assert!((effective_width(30.0) - 30.0).abs() < 1e-12);
        assert!((effective_width(400.0) - 360.0).abs() < 1e-12);
    }

    #[test]
    fn round_config_has_no_boundary() {
        let cfg = config(&cone(10.0).with_angle(90.0), ConeStyle::Round);
        assert!((cfg.radius - 10.0).abs() < 1e-12);
        assert!(cfg.boundary.is_empty());
        assert!(cfg.sector.is_some());
    }

    #[test]
    fn flat_config_rescales_distance_and_adds_chord() {
        let cfg = config(&cone(10.0).with_angle(90.0), ConeStyle::Flat);
        let reach = 10.0 / FRAC_PI_4.cos();

        assert_relative_eq!(cfg.radius, reach + RADIUS_MARGIN, epsilon = 1e-9);
        assert_eq!(cfg.boundary.len(), 1);
        let chord = cfg.boundary[0];
        assert_relative_eq!((chord.a - Point2::origin()).norm(), reach, epsilon = 1e-9);
        assert_relative_eq!((chord.b - Point2::origin()).norm(), reach, epsilon = 1e-9);
        // The chord midpoint sits at the nominal distance.
        let mid = nalgebra::center(&chord.a, &chord.b);
        assert_relative_eq!((mid - Point2::origin()).norm(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn wide_flat_cone_falls_back_to_round() {
        let cfg = config(&cone(10.0).with_angle(180.0), ConeStyle::Flat);
        assert!(cfg.boundary.is_empty());
        assert!((cfg.radius - 10.0).abs() < 1e-12);
    }

    #[test]
    fn flat_nominal_is_a_triangle() {
        let poly = nominal(&cone(10.0).with_angle(90.0), ConeStyle::Flat);
        assert_eq!(poly.len(), 3);
        assert!(poly.signed_area() > 0.0);
    }

    #[test]
    fn round_nominal_closes_at_the_origin() {
        let poly = nominal(&cone(10.0).with_angle(90.0), ConeStyle::Round);
        assert!((poly.vertices[0] - Point2::origin()).norm() < 1e-12);
        for v in &poly.vertices[1..] {
            assert!((v.coords.norm() - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_distance_config_is_degenerate() {
        let cfg = config(&cone(0.0), ConeStyle::Flat);
        assert!(cfg.radius.abs() < 1e-12);
        assert!(nominal(&cone(0.0), ConeStyle::Round).is_empty());
    }
}
