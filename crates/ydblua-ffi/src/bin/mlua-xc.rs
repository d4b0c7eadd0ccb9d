//! Print the YottaDB external-call table for the ydb-lua library.
//!
//! ```text
//! mlua-xc [LIBRARY_PATH] > $ydb_dist/plugin/mlua.xc
//! ```

use ydblua_types::callout::{external_call_table, DEFAULT_LIBRARY_PATH};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LIBRARY_PATH.to_string());
    print!("{}", external_call_table(&path));
}
