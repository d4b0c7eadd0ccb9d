//! Flattened interpreter errors.

use crate::Status;
use thiserror::Error;

/// A compile or runtime failure reported by the interpreter, reduced to
/// the status code and message text the host receives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExecError {
    /// Nonzero interpreter status.
    pub status: Status,
    /// Human-readable message, before truncation to the host buffer.
    pub message: String,
}

impl ExecError {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(Status::SYNTAX, message)
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(Status::RUNTIME, message)
    }

    pub fn memory(message: impl Into<String>) -> Self {
        Self::new(Status::MEMORY, message)
    }
}

/// Result of executing one chunk.
pub type ExecResult<T> = Result<T, ExecError>;
