use serde::{Deserialize, Serialize};

/// A scalar identifier that already points at an optimizer column.
pub trait ScalarIdent {
    fn column_id(&self) -> u32;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarIdentNode {
    pub column_id: u32,
    pub name: String,
}

impl ScalarIdentNode {
    pub fn new(column_id: u32, name: &str) -> Self {
        Self { column_id, name: name.to_string() }
    }
}

impl ScalarIdent for ScalarIdentNode {
    fn column_id(&self) -> u32 {
        self.column_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
