//! Logging initialization for the datasite tools.
//!
//! Thin wrapper over the observability package: JSONL to `log_path`
//! (`~/.syftbox/logs/dev.jsonl` when not given) plus compact stderr output,
//! filtered by `RUST_LOG` or the level given here.

use observability::LogConfig;
use std::path::PathBuf;

/// Initialize logging for `service_name` at `level`.
///
/// Unknown level strings fall back to `info`.
///
/// ```ignore
/// let paths = Paths::new()?;
/// init_logging("datasite-metadata", "debug", Some(paths.log_file()));
/// tracing::info!("starting");
/// ```
pub fn init_logging(service_name: &str, level: &str, log_path: Option<PathBuf>) {
    observability::init_with_config(log_config(service_name, level, log_path));
}

fn log_config(service_name: &str, level: &str, log_path: Option<PathBuf>) -> LogConfig {
    LogConfig {
        service_name: service_name.into(),
        default_level: parse_level(level).as_str().to_ascii_lowercase(),
        log_path,
        also_stderr: true,
    }
}

/// Parse a log level string into a tracing Level.
pub fn parse_level(level: &str) -> tracing::Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" | "warning" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_all_variants() {
        assert_eq!(parse_level("trace"), tracing::Level::TRACE);
        assert_eq!(parse_level("debug"), tracing::Level::DEBUG);
        assert_eq!(parse_level("info"), tracing::Level::INFO);
        assert_eq!(parse_level("warn"), tracing::Level::WARN);
        assert_eq!(parse_level("warning"), tracing::Level::WARN);
        assert_eq!(parse_level("error"), tracing::Level::ERROR);
    }

    #[test]
    fn parse_level_case_and_whitespace_insensitive() {
        assert_eq!(parse_level("DEBUG"), tracing::Level::DEBUG);
        assert_eq!(parse_level(" Warn "), tracing::Level::WARN);
    }

    #[test]
    fn log_config_routes_file_and_level() {
        let config = log_config(
            "datasite-metadata",
            "DEBUG",
            Some(PathBuf::from("/home/alice/.syftbox/logs/dev.jsonl")),
        );

        assert_eq!(config.service_name, "datasite-metadata");
        assert_eq!(config.default_level, "debug");
        assert_eq!(
            config.log_path,
            Some(PathBuf::from("/home/alice/.syftbox/logs/dev.jsonl"))
        );
        assert!(config.also_stderr);
    }

    #[test]
    fn parse_level_unknown_defaults_to_info() {
        assert_eq!(parse_level(""), tracing::Level::INFO);
        assert_eq!(parse_level("verbose"), tracing::Level::INFO);
        assert_eq!(parse_level("fatal"), tracing::Level::INFO);
    }
}
