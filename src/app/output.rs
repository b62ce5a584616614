//! Rendering of classified links for the CLI.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;

use crate::classify::Link;
use crate::config::OutputFormat;

const CSV_HEADER: [&str; 6] = [
    "raw",
    "absolute",
    "registrable_domain",
    "cross_host",
    "cross_organization",
    "kind",
];

/// Writes `links` to `out` in the requested format.
///
/// - `Plain`: one absolute URL per line
/// - `Json`: a pretty-printed array of link records
/// - `Csv`: a header row followed by one row per link
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_links<W: Write>(mut out: W, links: &[&Link], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for link in links {
                writeln!(out, "{}", link.absolute).context("Failed to write link")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, links).context("Failed to write JSON")?;
            writeln!(out).context("Failed to write JSON")?;
        }
        OutputFormat::Csv => {
            let mut writer = Writer::from_writer(&mut out);
            writer
                .write_record(CSV_HEADER)
                .context("Failed to write CSV header")?;
            for link in links {
                let cross_host = link.cross_host.to_string();
                let cross_organization = link.cross_organization.to_string();
                writer
                    .write_record([
                        link.raw.as_str(),
                        link.absolute.as_str(),
                        link.registrable_domain.as_deref().unwrap_or(""),
                        cross_host.as_str(),
                        cross_organization.as_str(),
                        link.kind().as_str(),
                    ])
                    .with_context(|| format!("Failed to write CSV row for {}", link.absolute))?;
            }
            writer.flush().context("Failed to flush CSV output")?;
        }
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Renders `links` into a string, see [`write_links`].
pub fn render(links: &[&Link], format: OutputFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_links(&mut buf, links, format)?;
    String::from_utf8(buf).context("Rendered output is not valid UTF-8")
}
