//! Core data models: extraction errors, the region table and the
//! normalized slot shapes

mod error;
mod region;
mod slot;

pub use error::*;
pub use region::*;
pub use slot::*;
