//! HTML scanning and link extraction.
//!
//! This module turns raw document bytes into the raw link strings found in
//! known tag/attribute pairs:
//! - `a`, `link` → `href`
//! - `img`, `script`, `iframe` → `src`
//!
//! Tokenizing is done with the `html5ever` tokenizer; no DOM is built.

mod filter;
mod tokens;

// Re-export public API
pub use filter::{extract_link, link_attribute};
pub use tokens::{start_tags, StartTag, StartTags};
