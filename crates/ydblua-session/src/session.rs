//! Session — the interpreter handle and its lifecycle state.

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::message::flatten_error;
use mlua::{Lua, LuaOptions, StdLib};
use tracing::debug;
use ydblua_types::ExecResult;

/// Lifecycle state of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No interpreter has been created yet.
    Absent,
    /// An interpreter is live and keeps its globals across executions.
    Open,
    /// The interpreter was released. The next `open` or `execute`
    /// creates a fresh one.
    Closed,
}

/// A persistent Lua scripting session.
///
/// Globals, loaded modules and metatable changes made by one
/// [`execute`](Session::execute) stay visible to the next. Nothing is
/// sandboxed and nothing is interrupted: a chunk that loops forever blocks
/// the caller.
pub struct Session {
    config: SessionConfig,
    lua: Option<Lua>,
    state: SessionState,
}

impl Session {
    /// Create an absent session with the default configuration.
    pub const fn new() -> Self {
        Self::with_config(SessionConfig::DEFAULT)
    }

    pub const fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            lua: None,
            state: SessionState::Absent,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The live interpreter, if the session is open.
    pub fn lua(&self) -> Option<&Lua> {
        self.lua.as_ref()
    }

    /// Create the interpreter unless one is already open.
    ///
    /// Returns `true` when a new interpreter was created. Opening an open
    /// session keeps the existing interpreter and its globals.
    pub fn open(&mut self) -> bool {
        if self.lua.is_some() {
            debug!("Lua session already open");
            return false;
        }
        self.interpreter();
        true
    }

    /// Compile `code` as one chunk and run it with no arguments,
    /// discarding any results. Opens the session first if needed.
    ///
    /// `code` is raw bytes: it need not be UTF-8 and may contain NULs.
    pub fn execute(&mut self, code: &[u8]) -> ExecResult<()> {
        debug!(len = code.len(), "executing Lua chunk");
        let name = self.config.chunk_name.clone();
        let result = self.interpreter().load(code).set_name(name).exec();
        result.map_err(|err| {
            let flat = flatten_error(&err);
            debug!(status = %flat.status, "Lua chunk failed");
            flat
        })
    }

    /// Release the interpreter and everything it owns.
    ///
    /// Fails without side effects when nothing is open.
    pub fn close(&mut self) -> SessionResult<()> {
        match self.state {
            SessionState::Absent => Err(SessionError::NotOpen),
            SessionState::Closed => Err(SessionError::AlreadyClosed),
            SessionState::Open => {
                self.lua = None;
                self.state = SessionState::Closed;
                debug!("Lua session closed");
                Ok(())
            }
        }
    }

    fn interpreter(&mut self) -> &Lua {
        let libs = self.config.libs;
        self.state = SessionState::Open;
        self.lua.get_or_insert_with(|| {
            debug!("opening Lua session");
            new_interpreter(libs)
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn new_interpreter(libs: StdLib) -> Lua {
    // SAFETY: the session runs trusted host code. Loading the debug library
    // is what `luaL_openlibs` does; nothing here relies on its absence.
    unsafe { Lua::unsafe_new_with(libs, LuaOptions::new()) }
}
