//! Tracing initialization and subscriber setup.
//!
//! Installs a `tracing` subscriber that filters by the configured level and
//! writes plain-text events to a log file under the data directory. Logging
//! is strictly optional: initialization failures are swallowed so a read-only
//! or misconfigured environment never blocks the store itself.

use crate::infrastructure::paths;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based output.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set (any `EnvFilter` directive, e.g. `"debug"`
///    or `"carrinho=trace"`)
/// 2. Default: `"info"`
///
/// # File Location
///
/// Events are appended to `carrinho.log` inside the resolved data directory.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or file cannot be created
/// - Idempotent: safe to call multiple times, only the first call takes effect
///
/// # Example
///
/// ```no_run
/// use carrinho::{observability, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
///
/// observability::init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = config.resolve_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::log_file(&data_dir))
    else {
        return;
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
