//! Session lifecycle errors.

use thiserror::Error;

/// Misuse of the session lifecycle.
///
/// Interpreter failures are not lifecycle errors; those are reported as
/// [`ExecError`](ydblua_types::ExecError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// `close` before any `open` or `execute`.
    #[error("no Lua session is open")]
    NotOpen,

    /// `close` on a session that was already closed.
    #[error("Lua session is already closed")]
    AlreadyClosed,
}

/// Result type for session lifecycle operations.
pub type SessionResult<T> = Result<T, SessionError>;
