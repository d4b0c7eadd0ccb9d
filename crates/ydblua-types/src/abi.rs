//! C ABI types matching `libyottadb.h` / `gtmxc_types.h`.

use libc::{c_char, c_int, c_ulong};

/// `ydb_int_t`: the integer type used for external-call return values.
pub type YdbInt = c_int;

/// Capacity in bytes of the output buffer the host allocates for `mlua`,
/// including the terminating NUL. Shared with the external-call table.
pub const OUTPUT_STRING_MAXIMUM_LENGTH: usize = 1_048_576;

/// `ydb_string_t`: a length-prefixed byte buffer owned by the host.
///
/// The bytes are not NUL terminated and may contain arbitrary data,
/// including interior NULs.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct YdbString {
    pub length: c_ulong,
    pub address: *mut c_char,
}

impl YdbString {
    /// Describe a borrowed byte slice. The caller must keep `bytes` alive
    /// for as long as the returned value is used.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            length: bytes.len() as c_ulong,
            address: bytes.as_ptr() as *mut c_char,
        }
    }

    /// View the buffer as a byte slice.
    ///
    /// A null address is read as an empty buffer regardless of `length`.
    ///
    /// # Safety
    ///
    /// `address` must either be null or point to `length` readable bytes
    /// that stay valid and unmodified for `'a`.
    pub unsafe fn as_bytes<'a>(&self) -> &'a [u8] {
        if self.address.is_null() || self.length == 0 {
            return &[];
        }
        std::slice::from_raw_parts(self.address as *const u8, self.length as usize)
    }
}

/// Copy `src` into `dst` as a NUL-terminated C string, truncating so the
/// terminator always fits. Like `snprintf("%s")`, copying stops at the
/// first NUL in `src`.
///
/// Returns the number of bytes copied, excluding the terminator.
pub fn copy_c_string(dst: &mut [u8], src: &[u8]) -> usize {
    let Some(room) = dst.len().checked_sub(1) else {
        return 0;
    };
    let src = match src.iter().position(|&b| b == 0) {
        Some(nul) => &src[..nul],
        None => src,
    };
    let n = src.len().min(room);
    dst[..n].copy_from_slice(&src[..n]);
    dst[n] = 0;
    n
}

// The output capacity must fit in `c_int` for hosts that declare it as a
// signed size.
const _: () = assert!(OUTPUT_STRING_MAXIMUM_LENGTH <= c_int::MAX as usize);
