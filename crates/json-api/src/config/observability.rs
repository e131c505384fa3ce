//! Logging Config

use clap::{Args, ValueEnum};

/// How log lines are rendered on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event
    #[default]
    Compact,

    /// One JSON object per event, for log shippers
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Base log level or `EnvFilter` directives, e.g. `debug` or `info,tally=trace`
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,
}
