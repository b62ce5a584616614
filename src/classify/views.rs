//! Filtered projections over classified links.

use clap::ValueEnum;

use super::{links, Link};
use crate::error_handling::LinkError;

/// Which classified links to keep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LinkFilter {
    /// Every discovered link
    #[default]
    All,
    /// Links whose host differs from the base host
    CrossHost,
    /// Links whose registrable domain differs from the base's
    CrossOrganization,
}

impl LinkFilter {
    /// `true` if `link` passes this filter.
    pub fn matches(&self, link: &Link) -> bool {
        match self {
            LinkFilter::All => true,
            LinkFilter::CrossHost => link.cross_host,
            LinkFilter::CrossOrganization => link.cross_organization,
        }
    }

    /// Keeps the matching links, preserving document order.
    pub fn apply<'a>(&self, links: &'a [Link]) -> Vec<&'a Link> {
        links.iter().filter(|link| self.matches(link)).collect()
    }
}

fn absolute_where(links: Vec<Link>, filter: LinkFilter) -> Vec<String> {
    links
        .into_iter()
        .filter(|link| filter.matches(link))
        .map(|link| link.absolute)
        .collect()
}

/// Absolute URLs of the links that point to a different organization.
///
/// # Errors
///
/// Fails exactly when [`links`](super::links) fails.
pub fn cross_organization_links(page: &[u8], base_domain: &str) -> Result<Vec<String>, LinkError> {
    Ok(absolute_where(links(page, base_domain)?, LinkFilter::CrossOrganization))
}

/// Absolute URLs of the links that point to a different host.
///
/// # Errors
///
/// Fails exactly when [`links`](super::links) fails.
pub fn cross_host_links(page: &[u8], base_domain: &str) -> Result<Vec<String>, LinkError> {
    Ok(absolute_where(links(page, base_domain)?, LinkFilter::CrossHost))
}
