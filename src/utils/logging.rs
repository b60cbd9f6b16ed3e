//! Logging utilities
//!
//! Sets up `env_logger` as the `log` backend.

use env_logger::Env;

/// Setup logging for the checker. `RUST_LOG` overrides the `warn` default.
///
/// Calling it again after a logger is installed has no effect.
pub fn setup_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init();
}
