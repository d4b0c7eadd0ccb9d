//! Diagnostics to the host's stderr.

use std::sync::Once;
use tracing::{debug, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use ydblua_types::VERSION;

/// Environment variable holding the log filter, e.g. `MLUA_LOG=debug`.
pub const LOG_ENV: &str = "MLUA_LOG";

const DEFAULT_FILTER: &str = "warn";

// Usage errors are the host's only diagnostic and must survive any filter.
const ALWAYS_ON: &str = "ydb_lua=error";

static INIT: Once = Once::new();

/// Install a stderr subscriber once per process.
///
/// If the embedding process already installed a global subscriber, that
/// one keeps receiving the bridge's events.
pub fn init() {
    INIT.call_once(|| {
        let spec = std::env::var(LOG_ENV).ok();
        let _ = subscriber(std::io::stderr, filter_from(spec.as_deref())).try_init();
        debug!(version = VERSION, "ydb-lua loaded");
    });
}

/// Build the log filter from an `MLUA_LOG`-style spec.
///
/// An absent or unparsable spec falls back to `warn`. Whatever the spec
/// says, this crate's `error` events stay enabled.
pub fn filter_from(spec: Option<&str>) -> EnvFilter {
    let filter = spec
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));
    match ALWAYS_ON.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// The bridge's plain-text subscriber writing to `writer`.
pub fn subscriber<W>(writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
}
