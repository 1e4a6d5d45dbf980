use crate::geometry::{rect, Polygon, RectCorners};
use crate::math::{angle, TOLERANCE};
use crate::sweep::{Sector, SweepConfig};

use super::Template;

/// Overshoot added to the sweep radius so rays reach past the far corners.
const RADIUS_MARGIN: f64 = 2.0;

/// The rectangle spanned by the template: origin is one corner, the
/// diagonal runs `distance` along `direction` to the opposite corner.
///
/// Returns the canonical corner set plus the quadrant sector the rectangle
/// occupies as seen from the origin corner. `None` when the diagonal is
/// axis-aligned and the rectangle collapses to a zero-area strip.
fn layout(template: &Template) -> Option<(RectCorners, Sector)> {
    let far = angle::polar(&template.origin, template.direction, template.distance);
    let dx = far.x - template.origin.x;
    let dy = far.y - template.origin.y;
    if dx.abs() <= TOLERANCE || dy.abs() <= TOLERANCE {
        return None;
    }

    let (x, y, w, h) = rect::normalized(&template.origin, &far);
    let corners = rect::corners(x, y, w, h);

    // The interior spans exactly the axis-aligned quadrant holding the
    // diagonal; the two boundary rays run along the origin-adjacent edges.
    let quadrant_diagonal = dy.signum().atan2(dx.signum());
    Some((corners, Sector::from_direction(quadrant_diagonal, 90.0)))
}

pub(crate) fn config(template: &Template) -> SweepConfig {
    if template.distance <= TOLERANCE {
        return SweepConfig::full(0.0);
    }
    match layout(template) {
        Some((corners, sector)) => {
            SweepConfig::within(sector, template.distance + RADIUS_MARGIN)
                .with_boundary(corners.edges().to_vec())
        }
        None => SweepConfig::full(0.0),
    }
}

pub(crate) fn nominal(template: &Template) -> Polygon {
    if template.distance <= TOLERANCE {
        return Polygon::empty();
    }
    match layout(template) {
        Some((c, _)) => Polygon::new(vec![
            c.top_left,
            c.top_right,
            c.bottom_right,
            c.bottom_left,
        ]),
        None => Polygon::empty(),
    }
}
