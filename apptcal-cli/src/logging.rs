//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with list output on stdout.
//! The filter comes from `APPTCAL_LOG` (e.g. `APPTCAL_LOG=debug`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "APPTCAL_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
