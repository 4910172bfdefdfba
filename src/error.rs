//! Error type shared by every evolutionary operator.
//!
//! All errors are caller mistakes (malformed populations, mismatched
//! topologies, bad parameters). Nothing here is transient, so operators
//! fail fast and never retry.

use thiserror::Error;

/// Errors raised by the evolutionary engine and the network structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvoError {
    /// A population or weight vector was empty where one is required.
    #[error("{what} must not be empty")]
    EmptyInput {
        /// What was empty, e.g. `"population"`.
        what: &'static str,
    },

    /// Two weight vectors that must share a length do not.
    #[error("weight vector length mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Length of the first (reference) vector.
        expected: usize,
        /// Length of the offending vector.
        actual: usize,
    },

    /// A parameter is outside its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl EvoError {
    pub(crate) fn empty(what: &'static str) -> Self {
        EvoError::EmptyInput { what }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EvoError::InvalidArgument(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvoError>;
