use serde::{Deserialize, Serialize};

/// An entry of a query's target list.
pub trait TargetEntry {
    /// Junk entries are computed for internal use and never materialized.
    fn is_junk(&self) -> bool;
    /// 1-based position in the target list (resno).
    fn ordinal_position(&self) -> u32;
    fn declared_name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEntryNode {
    pub resno: u32,
    pub resname: String,
    #[serde(default)]
    pub resjunk: bool,
}

impl TargetEntryNode {
    pub fn live(resno: u32, resname: &str) -> Self {
        Self { resno, resname: resname.to_string(), resjunk: false }
    }

    pub fn junk(resno: u32, resname: &str) -> Self {
        Self { resno, resname: resname.to_string(), resjunk: true }
    }
}

impl TargetEntry for TargetEntryNode {
    fn is_junk(&self) -> bool {
        self.resjunk
    }

    fn ordinal_position(&self) -> u32 {
        self.resno
    }

    fn declared_name(&self) -> &str {
        &self.resname
    }
}
