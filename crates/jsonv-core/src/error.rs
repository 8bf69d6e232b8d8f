//! Error types for value access and copy operations.

use std::collections::TryReserveError;

use crate::kind::Kind;
use thiserror::Error;

/// Errors raised by the value core.
///
/// All of these are contract errors: the core never parses untrusted input,
/// so every failure points at a caller asking for something the value does
/// not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A typed accessor was called on a value of a different kind.
    #[error("unexpected type: expected {} but found {}", .expected.describe(), .actual.describe())]
    TypeMismatch { expected: Kind, actual: Kind },

    /// Strict object lookup on a missing key.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// Strict array access past the end.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A raw discriminant outside the closed set of kinds.
    #[error("invalid kind discriminant: {0}")]
    InvalidKindState(u8),

    /// A deep copy could not allocate its payload.
    #[error("allocation failed while copying value: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Convenience alias used throughout jsonv-core.
pub type Result<T> = std::result::Result<T, Error>;
