// ABOUTME: Error types for path resolution over JSON-like trees
// ABOUTME: Defines the resolution failure value and its stable identifier

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unresolvable reference at '{path}': {reason}")]
    ReferenceInvalid { path: String, reason: String },
}

impl ResolveError {
    /// Stable identifier surfaced to callers alongside the failing path.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReferenceInvalid { .. } => "FOLLOW_JSON_PATH.REFERENCE_INVALID",
        }
    }

    /// The path that failed to resolve, in canonical rendered form.
    pub fn path(&self) -> &str {
        match self {
            Self::ReferenceInvalid { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
