//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `outlinks` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Writing the selected links to stdout
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use outlinks::app::write_links;
use outlinks::initialization::init_logger_with;
use outlinks::{run_extraction, Config, LinkError};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_extraction(&config) {
        Ok(report) => {
            let selected = report.selected();
            log::info!(
                "Selected {} of {} link{}",
                selected.len(),
                report.links.len(),
                if report.links.len() == 1 { "" } else { "s" }
            );
            write_links(std::io::stdout().lock(), &selected, config.output_format)
                .context("Failed to write links")?;
            Ok(())
        }
        Err(e) => {
            match e.downcast_ref::<LinkError>() {
                Some(link_error) => eprintln!("outlinks error [{}]: {:#}", link_error.kind(), e),
                None => eprintln!("outlinks error: {:#}", e),
            }
            process::exit(1);
        }
    }
}
