// Shared test helpers for loading fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::PathBuf;

/// Absolute path of a file under `tests/fixtures`.
#[allow(dead_code)] // Used by other test files
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Reads a fixture file into memory.
#[allow(dead_code)] // Used by other test files
pub fn load_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("Failed to read fixture")
}
