use thiserror::Error;

/// Recoverable errors raised while resolving variables.
///
/// A miss aborts the current translation attempt; the caller turns it into a
/// higher level diagnostic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("no variable at scope {scope_level}, slot {slot}, attribute {attribute_number}")]
    NoVariable { scope_level: u32, slot: u32, attribute_number: i32 },
}
