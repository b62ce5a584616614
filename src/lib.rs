//! outlinks library: link discovery and classification for HTML documents
//!
//! This library extracts the links of an HTML document (`a`/`link` hrefs and
//! `img`/`script`/`iframe` sources), resolves them against the page's base
//! domain, and classifies each one as same-host, cross-host within the same
//! organization, or cross-organization, using the Public Suffix List to find
//! registrable domains.
//!
//! # Example
//!
//! ```
//! use outlinks::{cross_organization_links, links};
//!
//! let page = br#"
//!     <a href="/about">About</a>
//!     <img src="https://images.example.com/logo.png">
//!     <script src="//cdn.thirdparty.net/widget.js"></script>
//! "#;
//!
//! let all = links(page, "example.com")?;
//! assert_eq!(all.len(), 3);
//! assert!(all[1].cross_host && !all[1].cross_organization);
//!
//! let external = cross_organization_links(page, "example.com")?;
//! assert_eq!(external, vec!["https://cdn.thirdparty.net/widget.js"]);
//! # Ok::<(), outlinks::LinkError>(())
//! ```
//!
//! Classification is synchronous and CPU-only. The suffix list is immutable,
//! so documents can be classified from several threads at once.

#![warn(missing_docs)]

pub mod app;
mod classify;
pub mod config;
mod domain;
mod error_handling;
pub mod initialization;
mod parse;
mod resolve;

// Re-export public API
pub use classify::{
    contains_disallowed_symbol, cross_host_links, cross_organization_links, links, links_with,
    Link, LinkFilter,
};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use domain::{public_suffix, registrable_domain};
pub use error_handling::{
    ClassificationStats, ConfigValidationError, DomainError, InitializationError, LinkError,
    LinkKind, SkipReason,
};
pub use parse::{extract_link, link_attribute, start_tags, StartTag, StartTags};
pub use resolve::{absolute_url, has_scheme, normalize_base, resolve, Resolved};
pub use run::{run_extraction, ExtractionReport};

// Internal run module (contains the CLI-facing extraction flow)
mod run {
    use anyhow::{Context, Result};

    use crate::app::{print_classification_statistics, read_document};
    use crate::classify::{links_with, Link, LinkFilter};
    use crate::config::Config;
    use crate::error_handling::ClassificationStats;
    use crate::initialization::init_extractor;

    /// Results of classifying one document.
    #[derive(Debug, Clone)]
    pub struct ExtractionReport {
        /// Every link found, in document order
        pub links: Vec<Link>,
        /// Filter requested by the configuration
        pub filter: LinkFilter,
        /// Non-zero classification counters as `(label, count)` pairs
        pub summary: Vec<(&'static str, usize)>,
    }

    impl ExtractionReport {
        /// Links that pass the configured filter, in document order.
        pub fn selected(&self) -> Vec<&Link> {
            self.filter.apply(&self.links)
        }
    }

    /// Reads the configured document and classifies its links.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the document cannot be
    /// read, or classification fails. Classification errors keep their
    /// [`LinkError`](crate::LinkError) as the root cause, so callers can
    /// `downcast_ref` it to report the error kind.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use outlinks::{run_extraction, Config};
    /// use std::path::PathBuf;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config {
    ///     file: PathBuf::from("page.html"),
    ///     base: "example.com".to_string(),
    ///     ..Default::default()
    /// };
    /// let report = run_extraction(&config)?;
    /// println!("{} links", report.links.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_extraction(config: &Config) -> Result<ExtractionReport> {
        config.validate().context("Invalid configuration")?;

        let page = read_document(&config.file)?;
        let extractor = init_extractor();
        let stats = ClassificationStats::new();

        let links = links_with(extractor.as_ref(), &page, &config.base, &stats).with_context(
            || {
                format!(
                    "Failed to classify links in {} against base '{}'",
                    config.file.display(),
                    config.base
                )
            },
        )?;

        print_classification_statistics(&stats);

        Ok(ExtractionReport {
            links,
            filter: config.filter,
            summary: stats.summary(),
        })
    }
}
