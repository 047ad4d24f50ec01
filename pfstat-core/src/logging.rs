use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize JSON logging on stderr, filtered by `RUST_LOG` (default "warn").
///
/// stdout is reserved for the report, so log events never go there.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}
