use serde::Serialize;

use crate::translate::{AttributeKey, ResolvedColumn};

/// One entry of a [`ScopedColumnMap`](crate::translate::ScopedColumnMap).
///
/// The key is repeated here by value so an entry can be reported or copied
/// without going back to the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedColumn {
    pub key: AttributeKey,
    pub column: ResolvedColumn,
}

impl MappedColumn {
    pub fn new(key: AttributeKey, column: ResolvedColumn) -> Self {
        Self { key, column }
    }

    pub fn column_id(&self) -> u32 {
        self.column.column_id
    }

    pub fn display_name(&self) -> &str {
        &self.column.display_name
    }
}
