// ABOUTME: Error types for the breadth-first substitution walker
// ABOUTME: Aggregates child-layer failures and the walker's own invariant breaks

use thiserror::Error;

use crate::interpolate::InterpolateError;
use crate::path::ResolveError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstituteError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Interpolate(#[from] InterpolateError),

    #[error("work queue yielded no path while non-empty")]
    PathInvalid,

    #[error("parent container at '{path}' could not be re-resolved")]
    RefInvalid { path: String },

    #[error("parent at '{path}' is not an indexable container")]
    RefNotObject { path: String },

    #[error("leaf path '{path}' has no final segment")]
    ParentPathInvalid { path: String },

    #[error("value at '{path}' is no longer a string")]
    ChildRefNotString { path: String },
}

impl SubstituteError {
    /// Stable identifier surfaced to callers alongside the failing path.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Resolve(err) => err.code(),
            Self::Interpolate(err) => err.code(),
            Self::PathInvalid => "EVALUATE_STRING_VARIABLES.PATH_INVALID",
            Self::RefInvalid { .. } => "EVALUATE_STRING_VARIABLES.REF_INVALID",
            Self::RefNotObject { .. } => "EVALUATE_STRING_VARIABLES.REF_NOT_OBJECT",
            Self::ParentPathInvalid { .. } => "EVALUATE_STRING_VARIABLES.PARENT_PATH_INVALID",
            Self::ChildRefNotString { .. } => "EVALUATE_STRING_VARIABLES.CHILD_REF_NOT_STRING",
        }
    }

    /// The failing path, when the failure has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Resolve(err) => Some(err.path()),
            Self::Interpolate(err) => Some(err.path()),
            Self::PathInvalid => None,
            Self::RefInvalid { path }
            | Self::RefNotObject { path }
            | Self::ParentPathInvalid { path }
            | Self::ChildRefNotString { path } => Some(path),
        }
    }
}

pub type Result<T> = std::result::Result<T, SubstituteError>;
