//! Tests for CLI option parsing.

use clap::Parser;
use outlinks::{Config, LinkFilter, LogFormat, LogLevel, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_cli_minimal_arguments() {
    let config = Config::try_parse_from(["outlinks", "page.html", "--base", "example.com"])
        .expect("Should parse minimal arguments");

    assert_eq!(config.file, PathBuf::from("page.html"));
    assert_eq!(config.base, "example.com");
    assert_eq!(config.filter, LinkFilter::All);
    assert_eq!(config.output_format, OutputFormat::Plain);
    // LogLevel doesn't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Warn)
    );
    match config.log_format {
        LogFormat::Plain => {}
        _ => panic!("Should be Plain format"),
    }
}

#[test]
fn test_cli_all_options() {
    let config = Config::try_parse_from([
        "outlinks",
        "-",
        "--base",
        "https://www.example.co.uk",
        "--filter",
        "cross-organization",
        "--output-format",
        "csv",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse all options");

    assert!(config.reads_stdin());
    assert_eq!(config.filter, LinkFilter::CrossOrganization);
    assert_eq!(config.output_format, OutputFormat::Csv);
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_cli_cross_host_filter() {
    let config = Config::try_parse_from([
        "outlinks",
        "page.html",
        "--base",
        "example.com",
        "--filter",
        "cross-host",
    ])
    .unwrap();
    assert_eq!(config.filter, LinkFilter::CrossHost);
}

#[test]
fn test_cli_requires_base() {
    assert!(Config::try_parse_from(["outlinks", "page.html"]).is_err());
}

#[test]
fn test_cli_requires_file() {
    assert!(Config::try_parse_from(["outlinks", "--base", "example.com"]).is_err());
}

#[test]
fn test_cli_rejects_unknown_filter() {
    let result = Config::try_parse_from([
        "outlinks",
        "page.html",
        "--base",
        "example.com",
        "--filter",
        "external",
    ]);
    assert!(result.is_err());
}
