//! External-call table for the host.
//!
//! YottaDB binds external routines through a call-out table (an `.xc`
//! file) naming the shared library followed by one line per entry point.
//! The table is generated from [`ENTRY_POINTS`] so the output buffer
//! capacity the host allocates always matches
//! [`OUTPUT_STRING_MAXIMUM_LENGTH`].
//!
//! ```text
//! /usr/local/lib/yottadb/plugin/libydb_lua.so
//! mlua_open: void mlua_open()
//! mlua: ydb_int_t mlua(I:ydb_string_t*, O:ydb_char_t*[1048576])
//! mlua_close: void mlua_close()
//! mlua_version_number: ydb_int_t mlua_version_number()
//! ```

use crate::OUTPUT_STRING_MAXIMUM_LENGTH;
use std::fmt;

/// Library path written when the caller does not supply one.
pub const DEFAULT_LIBRARY_PATH: &str = "$ydb_dist/plugin/libydb_lua.so";

/// A parameter as declared in the external-call table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// `I:ydb_string_t*` — length-prefixed input string.
    InputString,
    /// `O:ydb_char_t*[n]` — caller-allocated output buffer of `n` bytes.
    OutputChars(usize),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputString => write!(f, "I:ydb_string_t*"),
            Self::OutputChars(n) => write!(f, "O:ydb_char_t*[{n}]"),
        }
    }
}

/// One exported routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPoint {
    /// Name the host uses in `$&label`.
    pub label: &'static str,
    /// Exported C symbol.
    pub symbol: &'static str,
    /// Return type, or `None` for `void`.
    pub returns: Option<&'static str>,
    pub params: &'static [Param],
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}(",
            self.label,
            self.returns.unwrap_or("void"),
            self.symbol
        )?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, ")")
    }
}

/// Every routine the shared library exports, in table order.
pub const ENTRY_POINTS: &[EntryPoint] = &[
    EntryPoint {
        label: "mlua_open",
        symbol: "mlua_open",
        returns: None,
        params: &[],
    },
    EntryPoint {
        label: "mlua",
        symbol: "mlua",
        returns: Some("ydb_int_t"),
        params: &[
            Param::InputString,
            Param::OutputChars(OUTPUT_STRING_MAXIMUM_LENGTH),
        ],
    },
    EntryPoint {
        label: "mlua_close",
        symbol: "mlua_close",
        returns: None,
        params: &[],
    },
    EntryPoint {
        label: "mlua_version_number",
        symbol: "mlua_version_number",
        returns: Some("ydb_int_t"),
        params: &[],
    },
];

/// Render the external-call table for a library installed at `library_path`.
pub fn external_call_table(library_path: &str) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(library_path);
    out.push('\n');
    for entry in ENTRY_POINTS {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}
