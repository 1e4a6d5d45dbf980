use slotmap::SlotMap;

use crate::geometry::{Aabb, Segment};

slotmap::new_key_type! {
    /// Stable identifier for a wall inside a [`WallSet`].
    pub struct WallKey;
}

/// Read access to the scene's wall segments.
///
/// The shape engine only ever queries; implementations decide how walls are
/// stored and indexed. `query_near` may over-approximate (returning segments
/// outside the region is fine, missing segments inside it is not) and must
/// be safe for regions larger than any template.
pub trait WallIndex {
    /// Wall segments potentially relevant to the given region.
    fn query_near(&self, region: &Aabb) -> Vec<Segment>;

    /// Whether the index can be queried yet. A not-ready index makes the
    /// resolver skip wall constraining for that computation instead of
    /// failing.
    fn is_ready(&self) -> bool {
        true
    }
}

/// A plain in-memory wall index.
///
/// Walls live in a slotmap so hosts can hold on to [`WallKey`]s across
/// edits. Queries are a linear bounding-box scan; scenes with very large
/// wall counts are expected to bring their own [`WallIndex`].
#[derive(Debug, Clone, Default)]
pub struct WallSet {
    walls: SlotMap<WallKey, Segment>,
}

impl WallSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a wall, returning its key.
    pub fn insert(&mut self, wall: Segment) -> WallKey {
        self.walls.insert(wall)
    }

    /// Removes a wall. Returns the segment if the key was live.
    pub fn remove(&mut self, key: WallKey) -> Option<Segment> {
        self.walls.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WallKey, &Segment)> {
        self.walls.iter()
    }
}

impl WallIndex for WallSet {
    fn query_near(&self, region: &Aabb) -> Vec<Segment> {
        self.walls
            .values()
            .filter(|w| w.aabb().intersects(region))
            .copied()
            .collect()
    }
}
