use std::fmt;

use serde::{Deserialize, Serialize};

/// Address of one column as seen by the translator: the absolute scope level
/// of the owning query block, the slot (range table index) inside that scope,
/// and the attribute number of the column inside that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeKey {
    pub scope_level: u32,
    pub slot: u32,
    pub attribute_number: i32,
}

impl AttributeKey {
    pub fn new(scope_level: u32, slot: u32, attribute_number: i32) -> Self {
        Self { scope_level, slot, attribute_number }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.scope_level, self.slot, self.attribute_number)
    }
}
