use serde::{Deserialize, Serialize};

/// Slot number the executor uses for columns coming from the single input of
/// a window, aggregate or materialize node.
pub const OUTER_SLOT: u32 = 65001;

/// Construction settings for a [`ScopedColumnMap`](crate::translate::ScopedColumnMap).
///
/// - `initial_capacity` is how many entries the map reserves up front. Queries
///   with many wide tables produce a lot of entries.
/// - `outer_slot` is the slot window, aggregate and materialize nodes use to
///   expose their input's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMapConfig")]
pub struct MapConfig {
    /// Entries reserved when the map is created
    pub initial_capacity: usize,
    /// Slot substituted for variables under outer-slot node kinds
    pub outer_slot: u32,
}

#[derive(Deserialize)]
struct RawMapConfig {
    initial_capacity: usize,
    outer_slot: u32,
}

impl TryFrom<RawMapConfig> for MapConfig {
    type Error = String;

    fn try_from(raw: RawMapConfig) -> Result<Self, Self::Error> {
        if raw.outer_slot == 0 {
            return Err("outer slot must be positive".to_string());
        }
        Ok(Self { initial_capacity: raw.initial_capacity, outer_slot: raw.outer_slot })
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { initial_capacity: 2047, outer_slot: OUTER_SLOT }
    }
}

impl MapConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Panics if `outer_slot` is 0, the slot number no entry may use.
    pub fn with_outer_slot(mut self, outer_slot: u32) -> Self {
        assert!(outer_slot > 0, "outer slot must be positive");
        self.outer_slot = outer_slot;
        self
    }
}
