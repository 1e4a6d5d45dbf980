use crate::math::Point2;

use super::Aabb;

/// How a wall interacts with the visibility sweep, following the
/// light-sense convention: `Normal` walls block, `None` walls are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSense {
    None,
    #[default]
    Normal,
}

/// An opaque line segment, either a real wall from the scene's wall index
/// or a synthetic boundary built by a shape's configuration builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
    pub sense: WallSense,
}

impl Segment {
    /// Creates a normal (blocking) segment.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            a,
            b,
            sense: WallSense::Normal,
        }
    }

    /// Creates a segment with an explicit sense.
    #[must_use]
    pub fn with_sense(a: Point2, b: Point2, sense: WallSense) -> Self {
        Self { a, b, sense }
    }

    /// Whether the segment blocks the sweep.
    #[must_use]
    pub fn blocks(&self) -> bool {
        self.sense == WallSense::Normal
    }

    /// Bounding box of the segment.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_corners(&self.a, &self.b)
    }
}
