use crate::YdbInt;

/// The bridge's own version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The bridge's revision as returned by `mlua_version_number`:
/// `major * 10000 + minor * 100 + patch`. This is not the Lua version.
pub const VERSION_NUMBER: YdbInt = parse_decimal(env!("CARGO_PKG_VERSION_MAJOR")) * 10_000
    + parse_decimal(env!("CARGO_PKG_VERSION_MINOR")) * 100
    + parse_decimal(env!("CARGO_PKG_VERSION_PATCH"));

const fn parse_decimal(s: &str) -> YdbInt {
    let bytes = s.as_bytes();
    let mut n = 0;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "version component is not numeric");
        n = n * 10 + (bytes[i] - b'0') as YdbInt;
        i += 1;
    }
    n
}
