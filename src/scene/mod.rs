pub mod settings;
pub mod walls;

pub use settings::{ConeStyle, SceneSettings};
pub use walls::{WallIndex, WallKey, WallSet};
