use std::f64::consts::TAU;

use crate::geometry::Polygon;
use crate::math::{angle, TOLERANCE};
use crate::sweep::{SweepConfig, DEFAULT_DENSITY};

use super::Template;

/// A circle is exactly what the sweep natively computes: full turn, radius
/// equal to the template distance, no synthetic boundary.
pub(crate) fn config(template: &Template) -> SweepConfig {
    SweepConfig::full(template.distance)
}

/// Nominal circle, sampled the same way the engine samples an unobstructed
/// full turn so bypassed and wall-free constrained circles agree vertex for
/// vertex.
pub(crate) fn nominal(template: &Template) -> Polygon {
    if template.distance <= TOLERANCE {
        return Polygon::empty();
    }
    let rays = DEFAULT_DENSITY;
    let step = TAU / rays as f64;
    Polygon::new(
        (0..rays)
            .map(|i| angle::polar(&template.origin, i as f64 * step, template.distance))
            .collect(),
    )
}
