use serde::{Deserialize, Serialize};

/// A column produced by table or projection analysis.
pub trait ColumnDescriptor {
    fn attribute_number(&self) -> i32;
    fn column_id(&self) -> u32;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescr {
    pub attribute_number: i32,
    pub column_id: u32,
    pub name: String,
}

impl ColumnDescr {
    pub fn new(attribute_number: i32, column_id: u32, name: &str) -> Self {
        Self { attribute_number, column_id, name: name.to_string() }
    }
}

impl ColumnDescriptor for ColumnDescr {
    fn attribute_number(&self) -> i32 {
        self.attribute_number
    }

    fn column_id(&self) -> u32 {
        self.column_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
