use serde::{Deserialize, Serialize};

/// A variable reference inside a scalar expression.
pub trait VarRef {
    /// How many query levels outward the variable points (0 = current level).
    fn level_offset(&self) -> u32;
    fn slot(&self) -> u32;
    fn attribute_number(&self) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Var {
    pub varno: u32,
    pub varattno: i32,
    #[serde(default)]
    pub varlevelsup: u32,
}

impl Var {
    pub fn new(varno: u32, varattno: i32) -> Self {
        Self { varno, varattno, varlevelsup: 0 }
    }

    /// Same variable seen from `levels_up` query levels further in.
    pub fn outer(varno: u32, varattno: i32, levels_up: u32) -> Self {
        Self { varno, varattno, varlevelsup: levels_up }
    }
}

impl VarRef for Var {
    fn level_offset(&self) -> u32 {
        self.varlevelsup
    }

    fn slot(&self) -> u32 {
        self.varno
    }

    fn attribute_number(&self) -> i32 {
        self.varattno
    }
}
