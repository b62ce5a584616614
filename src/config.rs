//! Command-line configuration and shared constants.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::classify::LinkFilter;
use crate::error_handling::ConfigValidationError;

// URL handling
/// Scheme assumed for a base domain given without one.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";
/// A scheme token followed by `://`, anchored at the start of the string.
pub const URL_SCHEME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*://";

/// Literal substrings that mark a resolved host as noise from broken markup.
/// Links whose host contains any of them are skipped, not reported as errors.
pub const DISALLOWED_HOST_SYMBOLS: &[&str] = &["'", "&", "$", "^", "::", "\"", ";"];

/// Path value meaning "read the document from stdin".
pub const STDIN_PATH: &str = "-";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Failures only
    Error,
    /// Failures and warnings (default)
    Warn,
    /// Input size and statistics
    Info,
    /// One line per accepted link
    Debug,
    /// Every skipped tag
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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Colored single-line records
    Plain,
    /// One JSON object per line
    Json,
}

/// How selected links are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One absolute URL per line
    #[default]
    Plain,
    /// JSON array of link records
    Json,
    /// CSV with a header row
    Csv,
}

/// Command-line options and configuration.
///
/// # Examples
///
/// ```bash
/// # All links of a saved page, relative to its site
/// outlinks page.html --base example.com
///
/// # Only links to other organizations, as JSON
/// curl -s https://example.com | outlinks - --base example.com \
///     --filter cross-organization --output-format json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "outlinks",
    about = "Lists the links of an HTML document and classifies them against a base domain."
)]
pub struct Config {
    /// HTML document to read (`-` for stdin)
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Base domain the document was fetched from, with or without scheme
    #[arg(long)]
    pub base: String,

    /// Which links to print: all|cross-host|cross-organization
    #[arg(long, value_enum, default_value_t = LinkFilter::All)]
    pub filter: LinkFilter,

    /// Output format: plain|json|csv
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output_format: OutputFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: PathBuf::from(STDIN_PATH),
            base: String::new(),
            filter: LinkFilter::All,
            output_format: OutputFormat::Plain,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the options that clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.file.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "file",
                message: "must be a path or '-' for stdin".to_string(),
            });
        }
        if self.base.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "base",
                message: "must be a domain such as 'example.com' or a URL such as 'https://example.com'"
                    .to_string(),
            });
        }
        Ok(())
    }

    /// `true` when the document should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == STDIN_PATH
    }
}
