mod circle;
mod cone;
mod ray;
mod rect;
mod resolve;

pub use cone::DEFAULT_CONE_WIDTH;
pub use resolve::{compute_shape, nominal_shape, try_compute_shape};

use crate::error::TemplateError;
use crate::math::Point2;
use crate::scene::SceneSettings;

/// The four area-of-effect shapes, dispatched by a single match in the
/// shape resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Cone,
    Rectangle,
    Ray,
}

/// An area-of-effect shape request anchored at an origin point.
///
/// Transient and value-like: the resolver never mutates a template, and
/// nothing here is persisted. `direction` is in radians with 0 pointing due
/// east; `angle` is the cone width in degrees, where `<= 0` means "unset"
/// and falls back to [`DEFAULT_CONE_WIDTH`].
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub origin: Point2,
    pub kind: ShapeKind,
    /// Reach of the shape in scene distance units. For rectangles this is
    /// the diagonal length.
    pub distance: f64,
    pub direction: f64,
    pub angle: f64,
    /// Per-template override of the world's wall-constrained default.
    pub wall_constrained: Option<bool>,
}

impl Template {
    #[must_use]
    pub fn new(kind: ShapeKind, origin: Point2, distance: f64) -> Self {
        Self {
            origin,
            kind,
            distance,
            direction: 0.0,
            angle: 0.0,
            wall_constrained: None,
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: f64) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    #[must_use]
    pub fn with_wall_constrained(mut self, constrained: bool) -> Self {
        self.wall_constrained = Some(constrained);
        self
    }

    /// Effective wall-constrained flag: the template's own override when
    /// set, the world default otherwise.
    #[must_use]
    pub fn is_wall_constrained(&self, settings: &SceneSettings) -> bool {
        self.wall_constrained
            .unwrap_or(settings.wall_constrained_default)
    }

    pub(crate) fn validate(&self) -> Result<(), TemplateError> {
        let checks = [
            ("origin.x", self.origin.x),
            ("origin.y", self.origin.y),
            ("direction", self.direction),
            ("angle", self.angle),
        ];
        for (parameter, value) in checks {
            if !value.is_finite() {
                return Err(TemplateError::InvalidParameter { parameter, value });
            }
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(TemplateError::InvalidParameter {
                parameter: "distance",
                value: self.distance,
            });
        }
        Ok(())
    }
}
