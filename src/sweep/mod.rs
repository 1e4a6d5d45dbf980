pub mod config;
pub mod engine;

pub use config::{Sector, SweepConfig, DEFAULT_DENSITY};
pub use engine::sweep_polygon;
