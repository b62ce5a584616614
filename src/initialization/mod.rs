//! Application initialization and shared resources.
//!
//! This module provides:
//! - Logger setup for the CLI
//! - The Public Suffix List handle shared by classification calls

mod logger;

use std::sync::Arc;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// `psl::List` is compiled into the binary and immutable, so the returned
/// `Arc` can be handed to any number of threads classifying documents at the
/// same time without synchronization.
pub fn init_extractor() -> Arc<psl::List> {
    Arc::new(psl::List)
}
