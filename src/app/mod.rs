//! Main application modules.
//!
//! This module provides document loading, output rendering and statistics
//! printing used by the CLI.

pub mod input;
pub mod output;
pub mod statistics;

// Re-export public API
pub use input::read_document;
pub use output::{render, write_links};
pub use statistics::print_classification_statistics;
