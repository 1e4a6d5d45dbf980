use crate::math::Point2;

use super::Segment;

/// The four labeled corners of an axis-aligned rectangle.
///
/// Labels follow screen convention: `top_left` is the rectangle's `(x, y)`
/// anchor. The labels are derived from `x`, `y`, `width`, `height` exactly
/// as given; callers wanting meaningful labels for a rectangle defined by
/// two arbitrary corners must normalize with [`normalized`] first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectCorners {
    pub top_left: Point2,
    pub top_right: Point2,
    pub bottom_right: Point2,
    pub bottom_left: Point2,
}

impl RectCorners {
    /// The rectangle's four edges as blocking segments, in corner order.
    #[must_use]
    pub fn edges(&self) -> [Segment; 4] {
        [
            Segment::new(self.top_left, self.top_right),
            Segment::new(self.top_right, self.bottom_right),
            Segment::new(self.bottom_right, self.bottom_left),
            Segment::new(self.bottom_left, self.top_left),
        ]
    }
}

/// Corner points of the rectangle anchored at `(x, y)` with the given
/// width and height.
#[must_use]
pub fn corners(x: f64, y: f64, width: f64, height: f64) -> RectCorners {
    let x_right = x + width;
    let y_bottom = y + height;
    RectCorners {
        top_left: Point2::new(x, y),
        top_right: Point2::new(x_right, y),
        bottom_right: Point2::new(x_right, y_bottom),
        bottom_left: Point2::new(x, y_bottom),
    }
}

/// Canonical `(x, y, width, height)` form of the rectangle spanned by two
/// opposite corners, with non-negative width and height.
#[must_use]
pub fn normalized(a: &Point2, b: &Point2) -> (f64, f64, f64, f64) {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    (x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
}
