//! Session configuration.

use mlua::StdLib;
use std::borrow::Cow;

/// Chunk name shown in Lua diagnostics, e.g. `[string "mlua(code)"]:1:`.
pub const DEFAULT_CHUNK_NAME: &str = "mlua(code)";

/// How a [`Session`](crate::Session) builds its interpreter and names its
/// chunks.
///
/// `const`-constructible so a process-wide session can live in a `static`.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name given to every executed chunk.
    pub chunk_name: Cow<'static, str>,
    /// Standard libraries loaded when the interpreter is created.
    pub libs: StdLib,
}

impl SessionConfig {
    /// Full standard library (debug included) and the `mlua(code)` chunk
    /// name.
    pub const DEFAULT: Self = Self {
        chunk_name: Cow::Borrowed(DEFAULT_CHUNK_NAME),
        libs: StdLib::ALL,
    };

    pub fn with_chunk_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.chunk_name = name.into();
        self
    }

    pub fn with_libs(mut self, libs: StdLib) -> Self {
        self.libs = libs;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
