// ABOUTME: Placeholder interpolation module
// ABOUTME: Exports the string interpolator and its error surface

pub mod error;
pub mod interpolator;

pub use error::{InterpolateError, Result};
pub use interpolator::interpolate;
