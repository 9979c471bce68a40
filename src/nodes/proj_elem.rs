use serde::{Deserialize, Serialize};

/// One element of a projection list: a computed column with its own id and alias.
pub trait ProjectElement {
    fn column_id(&self) -> u32;
    fn alias_name(&self) -> &str;
}

/// An ordered projection list, e.g. the output of a join or append.
pub trait ProjectList {
    type Element: ProjectElement;

    fn elements(&self) -> &[Self::Element];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjElem {
    pub column_id: u32,
    pub alias: String,
}

impl ProjElem {
    pub fn new(column_id: u32, alias: &str) -> Self {
        Self { column_id, alias: alias.to_string() }
    }
}

impl ProjectElement for ProjElem {
    fn column_id(&self) -> u32 {
        self.column_id
    }

    fn alias_name(&self) -> &str {
        &self.alias
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjList {
    pub elements: Vec<ProjElem>,
}

impl ProjList {
    pub fn new(elements: Vec<ProjElem>) -> Self {
        Self { elements }
    }
}

impl ProjectList for ProjList {
    type Element = ProjElem;

    fn elements(&self) -> &[ProjElem] {
        &self.elements
    }
}
