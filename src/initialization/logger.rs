//! Logger initialization.
//!
//! Log lines go to stderr so they never interleave with links printed on stdout.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Starts from `RUST_LOG` and then applies `level` to this crate, so
/// `--log-level` always wins for `outlinks` targets while `RUST_LOG` can still
/// tune other modules. The `html5ever` tokenizer reports every markup parse
/// error at debug level, so it is held at `Error`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Trace every skipped tag of the classifier
/// outlinks page.html --base example.com --log-level trace
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=outlinks::classify=debug outlinks page.html --base example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("outlinks", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => builder.format(format_json),
        LogFormat::Plain => builder.format(format_plain),
    };

    builder.try_init().map_err(InitializationError::from)?;
    Ok(())
}

fn format_json(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

fn format_plain(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let level = record.level();
    let (emoji, colored_level) = match level {
        log::Level::Error => ("❌", level.to_string().red()),
        log::Level::Warn => ("⚠️", level.to_string().yellow()),
        log::Level::Info => ("✔️", level.to_string().green()),
        log::Level::Debug => ("🔍", level.to_string().blue()),
        log::Level::Trace => ("🔬", level.to_string().purple()),
    };

    writeln!(
        buf,
        "{} {} [{}] {}",
        emoji,
        record.target().cyan(),
        colored_level,
        record.args()
    )
}
