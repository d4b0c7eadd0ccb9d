use crate::YdbInt;
use std::fmt;

/// Status code returned by `mlua` to the host.
///
/// Interpreter failures carry Lua's own `lua.h` codes. The host is only
/// promised that 0 is success and -1 is a usage error; compile and runtime
/// failures are told apart by their message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(pub YdbInt);

impl Status {
    pub const OK: Self = Self(0);
    pub const USAGE: Self = Self(-1);

    // ── Lua status codes (lua.h) ──
    pub const RUNTIME: Self = Self(2); // LUA_ERRRUN
    pub const SYNTAX: Self = Self(3); // LUA_ERRSYNTAX
    pub const MEMORY: Self = Self(4); // LUA_ERRMEM

    /// The raw value handed back across the ABI.
    pub fn code(self) -> YdbInt {
        self.0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
