pub mod attribute_key;
pub use attribute_key::*;

pub mod resolved_column;
pub use resolved_column::*;

pub mod mapped_column;
pub use mapped_column::*;

pub mod translate_error;
pub use translate_error::*;

pub mod plan_node_kind;
pub use plan_node_kind::*;

pub mod map_config;
pub use map_config::*;

pub mod scoped_column_map;
pub use scoped_column_map::*;

pub mod loaders;

#[cfg(test)]
pub use _tests::fixtures;
