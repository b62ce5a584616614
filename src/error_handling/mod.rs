//! Error handling and classification statistics.
//!
//! This module provides:
//! - Error type definitions for classification, configuration and startup
//! - Thread-safe counters for skipped markup and accepted links
//!
//! Skips are never errors: a tag without a usable link, or a link whose host
//! is noise from malformed markup, is counted and passed over. Errors abort
//! the whole classification call.

mod stats;
mod types;

// Re-export public API
pub use stats::ClassificationStats;
pub use types::{
    ConfigValidationError, DomainError, InitializationError, LinkError, LinkKind, SkipReason,
};
