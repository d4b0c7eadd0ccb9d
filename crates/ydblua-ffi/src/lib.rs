//! ydb-lua as a shared library for the YottaDB external-call interface.
//!
//! The host binds the exported routines through an external-call table
//! (see [`ydblua_types::callout`]) and calls them from M code:
//!
//! ```text
//! set status=$&mlua.mlua("x = 1",.out)
//! set status=$&mlua.mlua("error('boom')",.out)   ; status'=0, out ends in "boom"
//! do &mlua.mlua_close()
//! ```
//!
//! One Lua session exists per process. It is created on the first
//! `mlua_open` or `mlua` call, keeps its globals between calls, and is
//! recreated on demand after `mlua_close`.

// Entry points receive raw pointers from the host and check them before use.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod logging;

use libc::{c_char, c_int};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error, warn};
use ydblua_session::Session;
use ydblua_types::{
    copy_c_string, Status, YdbInt, YdbString, OUTPUT_STRING_MAXIMUM_LENGTH, VERSION_NUMBER,
};

/// The process-wide session.
static SESSION: Mutex<Session> = Mutex::new(Session::new());

fn session() -> MutexGuard<'static, Session> {
    // Every state transition is a single assignment, so a panic elsewhere
    // cannot leave the session half-updated.
    SESSION.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Open the Lua session if it is not open already.
#[no_mangle]
pub extern "C" fn mlua_open(_argc: c_int) {
    logging::init();
    if !session().open() {
        debug!("mlua_open: reusing open Lua session");
    }
}

/// Run `code` in the Lua session, opening it if needed.
///
/// Returns 0 on success and sets `outstr` to the empty string. On a Lua
/// error returns the nonzero Lua status and copies the error message into
/// `outstr`, truncated to fit. `outstr` is only touched when `argc >= 2`.
/// Returns -1 without running anything when no code is supplied.
#[no_mangle]
pub extern "C" fn mlua(argc: c_int, code: *const YdbString, outstr: *mut c_char) -> YdbInt {
    logging::init();
    if argc < 1 || code.is_null() {
        error!("No Lua code string supplied");
        return Status::USAGE.code();
    }

    // SAFETY: the host passes a valid `ydb_string_t` whose buffer outlives
    // this call.
    let code = unsafe { (*code).as_bytes() };

    let out = if argc >= 2 && !outstr.is_null() {
        // SAFETY: the external-call table declares `outstr` as a buffer of
        // `OUTPUT_STRING_MAXIMUM_LENGTH` bytes.
        Some(unsafe {
            std::slice::from_raw_parts_mut(outstr as *mut u8, OUTPUT_STRING_MAXIMUM_LENGTH)
        })
    } else {
        None
    };

    match session().execute(code) {
        Ok(()) => {
            if let Some(out) = out {
                copy_c_string(out, b"");
            }
            Status::OK.code()
        }
        Err(e) => {
            if let Some(out) = out {
                copy_c_string(out, e.message.as_bytes());
            }
            e.status.code()
        }
    }
}

/// Close the Lua session. A later `mlua` call starts a fresh one.
#[no_mangle]
pub extern "C" fn mlua_close(_argc: c_int) {
    logging::init();
    if let Err(e) = session().close() {
        warn!("mlua_close: {e}");
    }
}

/// The bridge's own version number (not the Lua version).
#[no_mangle]
pub extern "C" fn mlua_version_number(_argc: c_int) -> YdbInt {
    VERSION_NUMBER
}
