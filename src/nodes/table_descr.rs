use serde::{Deserialize, Serialize};

use crate::nodes::{ColumnDescr, ColumnDescriptor};

/// A base table as described by the catalog, columns in catalog order.
pub trait TableDescriptor {
    type Column: ColumnDescriptor;

    fn columns(&self) -> &[Self::Column];

    fn arity(&self) -> usize {
        self.columns().len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescr {
    pub name: String,
    pub columns: Vec<ColumnDescr>,
}

impl TableDescr {
    pub fn new(name: &str, columns: Vec<ColumnDescr>) -> Self {
        Self { name: name.to_string(), columns }
    }
}

impl TableDescriptor for TableDescr {
    type Column = ColumnDescr;

    fn columns(&self) -> &[ColumnDescr] {
        &self.columns
    }
}
