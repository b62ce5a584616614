//! Link discovery and classification.
//!
//! This module drives a single pass over a document: every start tag that
//! carries a link is resolved against the base URL and tagged as same-host,
//! cross-host (same organization) or cross-organization, where organizations
//! are told apart by registrable domain.
//!
//! Failures are all-or-nothing. A link that resolves to an unparseable URL, or
//! whose host has no registrable domain, aborts the whole call and no partial
//! result is returned. Hosts containing characters that only show up in
//! broken markup are skipped silently instead.

mod views;

use log::{debug, trace};
use psl::Psl;
use serde::Serialize;
use url::Url;

use crate::config::DISALLOWED_HOST_SYMBOLS;
use crate::domain::registrable_domain;
use crate::error_handling::{ClassificationStats, LinkError, LinkKind, SkipReason};
use crate::parse::{extract_link, start_tags};
use crate::resolve::{host_with_port, normalize_base, resolve};

pub use views::{cross_host_links, cross_organization_links, LinkFilter};

/// One link discovered in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Attribute value as written in the markup
    pub raw: String,
    /// `raw` resolved against the base URL
    pub absolute: String,
    /// Registrable domain of the absolute URL's host, `None` when the URL has no host
    pub registrable_domain: Option<String>,
    /// Host (with explicit port) differs from the base host
    pub cross_host: bool,
    /// Registrable domain differs from the base's registrable domain
    pub cross_organization: bool,
}

impl Link {
    /// Most specific classification of this link.
    pub fn kind(&self) -> LinkKind {
        if self.cross_organization {
            LinkKind::CrossOrganization
        } else if self.cross_host {
            LinkKind::CrossHost
        } else {
            LinkKind::SameHost
        }
    }
}

/// The parsed base of a document, with everything links are compared against.
struct Base {
    url: Url,
    host: String,
    registrable_domain: Option<String>,
}

impl Base {
    fn parse<P: Psl>(list: &P, base_domain: &str) -> Result<Self, LinkError> {
        let normalized = normalize_base(base_domain);
        let url = Url::parse(&normalized).map_err(|source| LinkError::InvalidBaseUrl {
            base: normalized.clone(),
            source,
        })?;

        let bare_host = url.host_str().unwrap_or_default();
        let registrable_domain =
            registrable_domain(list, bare_host).map_err(|source| LinkError::Domain {
                host: bare_host.to_string(),
                link: None,
                source,
            })?;

        Ok(Base {
            host: host_with_port(&url).to_string(),
            url,
            registrable_domain,
        })
    }

    fn classify<P: Psl>(
        &self,
        list: &P,
        raw: &str,
        stats: &ClassificationStats,
    ) -> Result<Option<Link>, LinkError> {
        let resolved = resolve(raw, &self.url).map_err(|(absolute, source)| LinkError::Parse {
            link: raw.to_string(),
            absolute,
            source,
        })?;

        let host = host_with_port(&resolved.url);
        if contains_disallowed_symbol(host) {
            trace!("Skipping link '{}': disallowed symbol in host '{}'", raw, host);
            stats.increment_skipped(SkipReason::DisallowedHostSymbol);
            return Ok(None);
        }

        let bare_host = resolved.url.host_str().unwrap_or_default();
        let link_domain =
            registrable_domain(list, bare_host).map_err(|source| LinkError::Domain {
                host: bare_host.to_string(),
                link: Some(raw.to_string()),
                source,
            })?;

        let link = Link {
            cross_host: host != self.host,
            cross_organization: link_domain != self.registrable_domain,
            raw: raw.to_string(),
            absolute: resolved.absolute,
            registrable_domain: link_domain,
        };
        stats.increment_accepted(link.kind());
        debug!("Found {} link: {}", link.kind(), link.absolute);
        Ok(Some(link))
    }
}

/// Returns `true` if `host` contains any of the disallowed literal substrings.
pub fn contains_disallowed_symbol(host: &str) -> bool {
    DISALLOWED_HOST_SYMBOLS
        .iter()
        .any(|symbol| host.contains(symbol))
}

/// Extracts and classifies every link in `page` relative to `base_domain`.
///
/// Uses the built-in Public Suffix List and discards statistics. See
/// [`links_with`] for the full contract.
///
/// # Example
///
/// ```
/// let page = br#"<a href="/about">About</a><script src="//cdn.other.net/app.js"></script>"#;
/// let links = outlinks::links(page, "www.example.com")?;
/// assert_eq!(links[0].absolute, "https://www.example.com/about");
/// assert!(links[1].cross_organization);
/// # Ok::<(), outlinks::LinkError>(())
/// ```
pub fn links(page: &[u8], base_domain: &str) -> Result<Vec<Link>, LinkError> {
    links_with(&psl::List, page, base_domain, &ClassificationStats::new())
}

/// Extracts and classifies every link in `page` relative to `base_domain`.
///
/// `base_domain` may omit its scheme, in which case `https://` is assumed.
/// Links are returned in document order. Tags that carry no link, carry an
/// empty one, are self-closing, or whose resolved host contains a disallowed
/// symbol are skipped and counted in `stats`.
///
/// # Errors
///
/// - `LinkError::InvalidBaseUrl` if the normalized base does not parse
/// - `LinkError::Domain` if the base or any link host has no registrable domain
/// - `LinkError::Parse` if any resolved link does not parse
///
/// Any error stops the scan; links found before it are discarded.
pub fn links_with<P: Psl>(
    list: &P,
    page: &[u8],
    base_domain: &str,
    stats: &ClassificationStats,
) -> Result<Vec<Link>, LinkError> {
    let base = Base::parse(list, base_domain)?;
    debug!(
        "Classifying links against {} (registrable domain: {})",
        base.url,
        base.registrable_domain.as_deref().unwrap_or("none")
    );

    let mut links = Vec::new();
    for tag in start_tags(page) {
        let raw = extract_link(&tag);

        if tag.self_closing {
            if raw.is_some_and(|raw| !raw.is_empty()) {
                trace!("Skipping self-closing <{}> tag", tag.name);
                stats.increment_skipped(SkipReason::SelfClosingTag);
            }
            continue;
        }

        let raw = match raw {
            Some("") => {
                stats.increment_skipped(SkipReason::EmptyAttribute);
                continue;
            }
            Some(raw) => raw,
            None => {
                if crate::parse::link_attribute(&tag.name).is_some() {
                    stats.increment_skipped(SkipReason::MissingAttribute);
                }
                continue;
            }
        };

        if let Some(link) = base.classify(list, raw, stats)? {
            links.push(link);
        }
    }

    debug!("Classified {} links", links.len());
    Ok(links)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
