pub mod error;
pub mod geometry;
pub mod math;
pub mod scene;
pub mod sweep;
pub mod template;

pub use error::{Result, UmbraError};
pub use geometry::Polygon;
pub use scene::{ConeStyle, SceneSettings, WallIndex, WallSet};
pub use template::{compute_shape, nominal_shape, ShapeKind, Template};
