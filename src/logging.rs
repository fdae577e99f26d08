//! Tracing subscriber setup for the `routegraph` binary.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

pub const LOG_ENV: &str = "ROUTEGRAPH_LOG";

/// Installs a stderr fmt subscriber filtered by `ROUTEGRAPH_LOG`
/// (e.g. `ROUTEGRAPH_LOG=routegraph=debug`), falling back to
/// `routegraph=warn`. Later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("routegraph=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
