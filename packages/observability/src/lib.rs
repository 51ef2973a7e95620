//! # Observability
//!
//! Structured logging for the datasite setup tools.
//!
//! Binaries call [`init_with_config`] once at startup and then use
//! the standard `tracing` macros. Library crates only ever emit events; they
//! never install a subscriber.
//!
//! ## Dev Mode
//!
//! With the default `dev` feature every process appends structured JSONL to
//! [`LogConfig::log_path`] (`~/.syftbox/logs/dev.jsonl` unless set), so a setup
//! run can be inspected after the fact:
//!
//! - `tail -f ~/.syftbox/logs/dev.jsonl | jq`
//! - `jq 'select(.service == "datasite-metadata")' ~/.syftbox/logs/dev.jsonl`
//!
//! If the log file cannot be opened the subscriber degrades to stderr only.
//!
//! ## Usage
//!
//! ```rust,ignore
//! fn main() {
//!     observability::init_with_config(observability::LogConfig {
//!         service_name: "datasite-metadata".into(),
//!         default_level: "debug".into(),
//!         also_stderr: true,
//!         ..Default::default()
//!     });
//!
//!     tracing::info!("ready");
//! }
//! ```

#[cfg(feature = "dev")]
mod dev;

mod json_layer;

use std::path::PathBuf;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Name of the service, included in every JSONL line.
    pub service_name: String,

    /// Default log level filter (e.g., "debug", "info", "warn").
    /// Can be overridden by `RUST_LOG` environment variable.
    pub default_level: String,

    /// Optional custom log file path.
    /// Defaults to `~/.syftbox/logs/dev.jsonl` in dev mode.
    pub log_path: Option<PathBuf>,

    /// Also emit logs to stderr for immediate feedback.
    pub also_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown".into(),
            default_level: "info".into(),
            log_path: None,
            also_stderr: false,
        }
    }
}

/// Initialize logging with custom configuration.
///
/// Installing a second global subscriber is a no-op, so tests and binaries
/// may call this more than once.
pub fn init_with_config(config: LogConfig) {
    #[cfg(feature = "dev")]
    {
        if let Err(err) = dev::init_dev_subscriber(&config) {
            init_stderr_only(&config);
            tracing::warn!(error = %err, "central log file unavailable, logging to stderr only");
        }
    }

    #[cfg(not(feature = "dev"))]
    init_stderr_only(&config);
}

fn init_stderr_only(config: &LogConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.default_level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Build the level filter from `RUST_LOG`, falling back to `default_level`.
pub(crate) fn env_filter(default_level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
}
