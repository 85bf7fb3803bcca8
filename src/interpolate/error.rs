// ABOUTME: Error types for placeholder interpolation
// ABOUTME: Wraps resolution failures so callers see one error surface per layer

use thiserror::Error;

use crate::path::ResolveError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl InterpolateError {
    /// Stable identifier of the underlying failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Resolve(err) => err.code(),
        }
    }

    /// The path that failed to resolve.
    pub fn path(&self) -> &str {
        match self {
            Self::Resolve(err) => err.path(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InterpolateError>;
