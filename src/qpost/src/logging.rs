//! Logging stays quiet for scheduled runs; `RUST_LOG` opens it up.

use tracing_subscriber::EnvFilter;

// Warnings from qpost only, and errors from the transport library, so
// broker chatter never reaches cron mail.
const DEFAULT_DIRECTIVE: &str = "qpost=warn,lapin=error";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
