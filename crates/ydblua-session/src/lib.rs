//! ydb-lua session: one embedded Lua interpreter and its lifecycle.
//!
//! A [`Session`] lazily creates its interpreter on first use, keeps global
//! state across executions, and can be closed and later recreated:
//!
//! ```text
//!            open / execute            close
//!   Absent ─────────────────▶ Open ─────────────▶ Closed
//!                              ▲  ╰─ execute ─╯      │
//!                              ╰──── open / execute ─╯
//! ```
//!
//! Interpreter failures are flattened into [`ExecError`] values carrying
//! the Lua status code and message text.

mod config;
mod error;
mod message;
mod session;

pub use config::{SessionConfig, DEFAULT_CHUNK_NAME};
pub use error::{SessionError, SessionResult};
pub use message::flatten_error;
pub use session::{Session, SessionState};
pub use ydblua_types::{ExecError, ExecResult, Status};
