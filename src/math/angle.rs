use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// Wraps an angle into the range `[0, 2π)`.
#[must_use]
pub fn normalize(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Returns the point reached by travelling `distance` from `origin` at
/// the given angle (radians, 0 = +x axis, counter-clockwise positive).
#[must_use]
pub fn polar(origin: &Point2, angle: f64, distance: f64) -> Point2 {
    origin + Vector2::new(angle.cos(), angle.sin()) * distance
}

/// Angle of the vector from `origin` to `target`, in `(-π, π]`.
#[must_use]
pub fn bearing(origin: &Point2, target: &Point2) -> f64 {
    (target.y - origin.y).atan2(target.x - origin.x)
}
