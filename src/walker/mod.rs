// ABOUTME: Tree walker module for whole-tree placeholder substitution
// ABOUTME: Exports the breadth-first walker, parameter tables, and errors

pub mod error;
pub mod params;
pub mod substitute;

pub use error::{Result, SubstituteError};
pub use params::{merge, ParamTable};
pub use substitute::walk_and_substitute;
