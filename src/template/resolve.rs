use tracing::debug;

use crate::error::{Result, SceneError, UmbraError};
use crate::geometry::Polygon;
use crate::math::{Point2, TOLERANCE};
use crate::scene::{SceneSettings, WallIndex};
use crate::sweep::{sweep_polygon, SweepConfig};

use super::{circle, cone, ray, rect, Template};

/// Computes a template's footprint in template-local coordinates.
///
/// The single entry point of the engine: deterministic given its inputs and
/// free of side effects beyond trace logging. Degrades instead of failing —
/// invalid parameters yield the empty polygon, and an unavailable wall
/// index yields the unconstrained nominal shape, so a malformed request can
/// never take the host down.
#[must_use]
pub fn compute_shape(
    template: &Template,
    walls: &dyn WallIndex,
    settings: &SceneSettings,
) -> Polygon {
    match try_compute_shape(template, walls, settings) {
        Ok(polygon) => polygon,
        Err(UmbraError::Scene(SceneError::WallIndexUnavailable)) => {
            debug!("wall index unavailable, falling back to the nominal shape");
            nominal_shape(template, settings)
        }
        Err(err) => {
            debug!(%err, "invalid template, yielding the empty polygon");
            Polygon::empty()
        }
    }
}

/// Strict variant of [`compute_shape`].
///
/// # Errors
///
/// `TemplateError::InvalidParameter` for non-finite coordinates or a
/// negative distance; `SceneError::WallIndexUnavailable` when wall
/// constraining was requested but the index is not ready.
pub fn try_compute_shape(
    template: &Template,
    walls: &dyn WallIndex,
    settings: &SceneSettings,
) -> Result<Polygon> {
    template.validate()?;

    if !template.is_wall_constrained(settings) {
        return Ok(nominal_shape(template, settings));
    }
    if !walls.is_ready() {
        return Err(SceneError::WallIndexUnavailable.into());
    }
    if template.distance <= TOLERANCE {
        return Ok(Polygon::empty());
    }

    debug!(
        kind = ?template.kind,
        x = template.origin.x,
        y = template.origin.y,
        distance = template.distance,
        "computing wall-constrained shape"
    );
    let config = build_config(template, settings);
    let world = sweep_polygon(&template.origin, &config, walls);
    Ok(to_local(&world, &template.origin))
}

/// The nominal, unconstrained footprint of a template in template-local
/// coordinates: what the shape looks like when walls are ignored entirely.
#[must_use]
pub fn nominal_shape(template: &Template, settings: &SceneSettings) -> Polygon {
    if template.validate().is_err() {
        return Polygon::empty();
    }
    let world = match template.kind {
        super::ShapeKind::Circle => circle::nominal(template),
        super::ShapeKind::Cone => cone::nominal(template, settings.cone_style),
        super::ShapeKind::Rectangle => rect::nominal(template),
        super::ShapeKind::Ray => ray::nominal(template),
    };
    to_local(&world, &template.origin)
}

fn build_config(template: &Template, settings: &SceneSettings) -> SweepConfig {
    match template.kind {
        super::ShapeKind::Circle => circle::config(template),
        super::ShapeKind::Cone => cone::config(template, settings.cone_style),
        super::ShapeKind::Rectangle => rect::config(template),
        super::ShapeKind::Ray => ray::config(template),
    }
}

/// Shifts a world-space polygon into template-local space, so downstream
/// consumers can draw it without re-reading the origin.
fn to_local(polygon: &Polygon, origin: &Point2) -> Polygon {
    polygon.translated(Point2::origin() - origin)
}
