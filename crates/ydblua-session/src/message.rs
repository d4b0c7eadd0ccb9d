//! Flattening of `mlua` errors into host-facing status and text.

use mlua::Error;
use ydblua_types::ExecError;

// `luaL_traceback` always follows the header with at least one `\n\t` frame.
const TRACEBACK_MARKER: &str = "\nstack traceback:\n\t";

/// Reduce an interpreter error to the status code and message the host
/// receives.
///
/// Syntax errors keep the compiler's message. Runtime errors keep the
/// string form of the raised value, without the traceback the error
/// handler appends after it. Wrapped errors report their innermost cause.
pub fn flatten_error(err: &Error) -> ExecError {
    match err {
        Error::SyntaxError { message, .. } => ExecError::syntax(message.clone()),
        Error::RuntimeError(message) => ExecError::runtime(strip_traceback(message)),
        Error::MemoryError(message) => ExecError::memory(message.clone()),
        Error::CallbackError { cause, .. } => flatten_error(cause),
        Error::WithContext { cause, .. } => flatten_error(cause),
        other => ExecError::runtime(strip_traceback(&other.to_string())),
    }
}

fn strip_traceback(message: &str) -> &str {
    match message.rfind(TRACEBACK_MARKER) {
        Some(at) => &message[..at],
        None => message,
    }
}
