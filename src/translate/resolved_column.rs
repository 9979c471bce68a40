use serde::{Deserialize, Serialize};

/// A column in the optimizer namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColumn {
    /// Id assigned upstream by the translator
    pub column_id: u32,
    /// Optimizer-visible column name, owned by the map
    pub display_name: String,
}

impl ResolvedColumn {
    pub fn new(column_id: u32, display_name: impl Into<String>) -> Self {
        Self { column_id, display_name: display_name.into() }
    }
}
