pub mod column_descr;
pub use column_descr::*;

pub mod table_descr;
pub use table_descr::*;

pub mod target_entry;
pub use target_entry::*;

pub mod var;
pub use var::*;

pub mod scalar_ident;
pub use scalar_ident::*;

pub mod proj_elem;
pub use proj_elem::*;
