//! Diagnostic logging on stderr via `tracing`.
//!
//! Filter: `ROLLCALL_LOG` (EnvFilter syntax) or the `log_level` config value.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ROLLCALL_LOG";

pub fn init(cfg: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    // Already initialised (e.g. twice in one test process) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
