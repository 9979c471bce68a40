pub mod nodes;

pub mod translate;
pub use translate::{
    AttributeKey, MapConfig, MappedColumn, PlanNodeKind, ResolvedColumn, ScopedColumnMap, TranslateError,
};
