//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_USER_AGENT;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration and command-line options.
///
/// The struct is generated by `clap` from the field attributes, and doubles
/// as the library configuration: library callers construct it via
/// [`Config::default`] and override fields programmatically.
///
/// # Examples
///
/// ```bash
/// # Grade every URL in a file
/// site_grader urls.txt
///
/// # Read URLs from stdin, write the full report to a JSON file
/// echo "example.com" | site_grader - --output report.json
///
/// # Recalibrated weights, heavier concurrency
/// site_grader urls.txt --calibration weights.json --max-concurrency 32
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "site_grader",
    about = "Fetches websites and scores them across nine quality dimensions."
)]
pub struct Config {
    /// File of URLs to grade, one per line ('-' reads from stdin)
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Maximum concurrent fetches
    ///
    /// Kept modest by default: each URL may open two TLS connections while
    /// the certificate state is probed.
    #[arg(long, default_value_t = 16)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long = "timeout", default_value_t = 10)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Write the batch report (results + failures) to this JSON file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// JSON file overriding scoring weights and thresholds
    #[arg(long)]
    pub calibration: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urls.txt"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            max_concurrency: 16,
            timeout_seconds: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output: None,
            calibration: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        // Each level should be more restrictive than the next
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_concurrency, 16);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.output.is_none());
        assert!(config.calibration.is_none());
    }

    #[test]
    fn test_log_format_debug() {
        // Debug formatting should name the variant
        assert_eq!(format!("{:?}", LogFormat::Plain), "Plain");
        assert_eq!(format!("{:?}", LogFormat::Json), "Json");
    }
}
