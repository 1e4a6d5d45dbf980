pub mod bounds;
pub mod polygon;
pub mod rect;
pub mod segment;

pub use bounds::Aabb;
pub use polygon::Polygon;
pub use rect::RectCorners;
pub use segment::{Segment, WallSense};
