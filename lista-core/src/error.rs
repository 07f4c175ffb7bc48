//! Structured error types for the Lista crates.

use thiserror::Error;

/// Unified error type for all Lista operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListaError {
    /// Invalid argument (empty coefficient list, byte outside an alphabet)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Position outside `[0, len)`
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience alias used throughout the Lista crates.
pub type Result<T> = std::result::Result<T, ListaError>;
