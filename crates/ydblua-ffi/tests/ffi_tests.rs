//! Tests of the exported C entry points, called the way the host calls them.
//!
//! All tests in this binary share the process-wide session. Only
//! `session_lifecycle` opens and closes it; the others hold no state
//! between calls.

use std::ffi::CStr;
use std::io;
use std::ptr;
use std::sync::{Arc, Mutex};
use ydb_lua::{logging, mlua, mlua_close, mlua_open, mlua_version_number};
use ydblua_types::{Status, YdbString, OUTPUT_STRING_MAXIMUM_LENGTH, VERSION_NUMBER};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

/// A host-sized output buffer pre-filled with a sentinel byte.
fn out_buffer() -> Vec<u8> {
    vec![b'#'; OUTPUT_STRING_MAXIMUM_LENGTH]
}

/// Call `mlua(2, code, out)` and return the status and output text.
fn call(code: &[u8]) -> (i32, String) {
    let mut out = out_buffer();
    let code = YdbString::from_bytes(code);
    let status = mlua(2, &code, out.as_mut_ptr().cast());
    let text = CStr::from_bytes_until_nul(&out)
        .expect("output is NUL terminated")
        .to_string_lossy()
        .into_owned();
    (status, text)
}

/// Log sink that appends to a shared buffer.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with the bridge's subscriber writing into a buffer, filtered by
/// an `MLUA_LOG`-style spec, and return what was logged.
fn logged_with<R>(spec: Option<&str>, f: impl FnOnce() -> R) -> (R, String) {
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = logging::subscriber(move || writer.clone(), logging::filter_from(spec));
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, sink.text())
}

// ══════════════════════════════════════════════════════════════════════════════
// Usage errors
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn missing_code_is_usage_error() {
    let mut out = out_buffer();
    let code = YdbString::from_bytes(b"x = 1");
    let status = mlua(0, &code, out.as_mut_ptr().cast());
    assert_eq!(status, Status::USAGE.code());
    assert!(out.iter().all(|&b| b == b'#'), "output buffer was modified");
}

#[test]
fn usage_error_is_logged_whatever_the_filter() {
    let code = YdbString::from_bytes(b"x = 1");
    for spec in [None, Some("warn"), Some("off"), Some(""), Some("not a filter")] {
        let (status, log) = logged_with(spec, || mlua(0, &code, ptr::null_mut()));
        assert_eq!(status, -1);
        assert!(
            log.contains("No Lua code string supplied"),
            "spec {spec:?} logged {log:?}"
        );
    }
}

#[test]
fn off_filter_still_hides_warnings() {
    let (_, log) = logged_with(Some("off"), || {
        tracing::warn!(target: "ydb_lua", "mlua_close: no Lua session is open")
    });
    assert!(log.is_empty(), "got {log:?}");
}

#[test]
fn null_code_pointer_is_usage_error() {
    let mut out = out_buffer();
    let status = mlua(2, ptr::null(), out.as_mut_ptr().cast());
    assert_eq!(status, -1);
    assert_eq!(out[0], b'#');
}

// ══════════════════════════════════════════════════════════════════════════════
// Execute
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn success_clears_output() {
    assert_eq!(call(b"return 1+1"), (0, String::new()));
}

#[test]
fn runtime_error_is_copied_out() {
    let (status, text) = call(b"error('boom')");
    assert_ne!(status, 0);
    assert!(text.ends_with("boom"), "got {text:?}");
}

#[test]
fn syntax_error_is_copied_out() {
    let (status, text) = call(b"local = 3");
    assert_ne!(status, 0);
    assert!(!text.is_empty());
    assert!(text.len() <= OUTPUT_STRING_MAXIMUM_LENGTH - 1);
}

#[test]
fn long_error_is_truncated_to_capacity() {
    let code = format!("error(string.rep('e', {}), 0)", OUTPUT_STRING_MAXIMUM_LENGTH * 2);
    let (status, text) = call(code.as_bytes());
    assert_eq!(status, Status::RUNTIME.code());
    assert_eq!(text.len(), OUTPUT_STRING_MAXIMUM_LENGTH - 1);
    assert!(text.bytes().all(|b| b == b'e'));
}

#[test]
fn single_argument_leaves_output_alone() {
    let code = YdbString::from_bytes(b"error('ignored')");
    let mut out = out_buffer();
    let status = mlua(1, &code, out.as_mut_ptr().cast());
    assert_ne!(status, 0);
    assert_eq!(out[0], b'#');
}

#[test]
fn null_output_buffer_is_skipped() {
    let code = YdbString::from_bytes(b"error('nowhere')");
    assert_ne!(mlua(2, &code, ptr::null_mut()), 0);
}

// ══════════════════════════════════════════════════════════════════════════════
// Version
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn version_is_constant() {
    let first = mlua_version_number(0);
    assert_eq!(first, VERSION_NUMBER);
    mlua_open(0);
    assert_eq!(mlua_version_number(0), first);
    assert_eq!(mlua_version_number(3), first);
}

// ══════════════════════════════════════════════════════════════════════════════
// Session lifecycle
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn session_lifecycle() {
    mlua_open(0);
    mlua_open(0);

    assert_eq!(call(b"lifecycle_x = 1").0, 0);
    assert_eq!(call(b"assert(lifecycle_x == 1)"), (0, String::new()));

    for _ in 0..10_000 {
        let (status, text) = call(b"error('again')");
        assert_ne!(status, 0);
        assert!(text.ends_with("again"));
    }
    assert_eq!(call(b"assert(lifecycle_x == 1)").0, 0);

    mlua_close(0);
    mlua_close(0);
    assert_eq!(call(b"assert(lifecycle_x == nil)"), (0, String::new()));
    assert_eq!(mlua_version_number(0), VERSION_NUMBER);
}
