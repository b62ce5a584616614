//! Document loading for the CLI.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::config::STDIN_PATH;

/// Reads the whole document from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error naming the path if the file cannot be opened or read.
pub fn read_document(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == STDIN_PATH {
        log::info!("Reading document from stdin");
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("Failed to read document from stdin")?;
        return Ok(buf);
    }

    let page = std::fs::read(path)
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    log::info!("Read {} bytes from {}", page.len(), path.display());
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_document_from_file() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("page.html");
        std::fs::write(&path, b"<a href=\"/x\">x</a>").unwrap();

        assert_eq!(read_document(&path).unwrap(), b"<a href=\"/x\">x</a>");
    }

    #[test]
    fn test_read_document_missing_file_names_path() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("missing.html");

        let err = read_document(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.html"));
    }
}
