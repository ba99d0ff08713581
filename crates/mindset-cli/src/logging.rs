//! tracing subscriber setup.
//!
//! Logs go to stderr so rendered pages on stdout stay clean. `RUST_LOG`
//! wins over the configured `log.level`.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the subscriber. `level` is the configured default directive;
/// an unparseable one falls back to `info`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
