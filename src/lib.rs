// ABOUTME: Main library module for the stencil template-variable resolution engine
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod interpolate;
pub mod path;
pub mod walker;

// Re-export commonly used types
pub use interpolate::{interpolate, InterpolateError};
pub use path::{resolve, resolve_mut, ResolveError, Segment};
pub use walker::{walk_and_substitute, ParamTable, SubstituteError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
