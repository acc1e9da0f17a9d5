use crate::utils::config::get_env_or_default;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level is read from `LOGLEVEL` (`ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE`)
/// and defaults to `INFO`. Calling it more than once is a no-op, and an
/// already installed global subscriber is left in place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = get_env_or_default("LOGLEVEL", String::from("INFO")).to_uppercase();

        let level = match log_level.as_str() {
            "ERROR" => Level::ERROR,
            "WARN" => Level::WARN,
            "DEBUG" => Level::DEBUG,
            "TRACE" => Level::TRACE,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}
