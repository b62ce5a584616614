//! Link resolution against a document's base URL.
//!
//! Resolution is intentionally simple: a link is either kept as-is (it already
//! has a scheme), completed with the base scheme (protocol-relative), appended
//! to the base origin (absolute path), or joined to the base origin with a
//! single `/`. Dot segments are not normalized and the base path is never
//! merged in.

use std::sync::LazyLock;

use regex::Regex;
use url::{Position, Url};

use crate::config::{DEFAULT_SCHEME_PREFIX, URL_SCHEME_PATTERN};

static URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(URL_SCHEME_PATTERN).unwrap_or_else(|e| {
        panic!(
            "URL scheme pattern '{}' should always compile - this is a programming error: {}",
            URL_SCHEME_PATTERN, e
        )
    })
});

/// A link resolved to absolute form.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Resolved string, exactly as built from the link and the base
    pub absolute: String,
    /// Parsed form of `absolute`
    pub url: Url,
}

/// Returns `true` if `link` starts with a scheme token followed by `://`.
pub fn has_scheme(link: &str) -> bool {
    URL_SCHEME.is_match(link)
}

/// Prefixes `https://` onto a base domain that has no scheme of its own.
pub fn normalize_base(base_domain: &str) -> String {
    if has_scheme(base_domain) {
        base_domain.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{base_domain}")
    }
}

/// The base URL up to, but not including, its path.
///
/// `https://user@site.com:8080/dir/page?q` gives `https://user@site.com:8080`.
pub fn origin(base: &Url) -> &str {
    &base[..Position::BeforePath]
}

/// Host plus explicit port of a parsed URL, empty when there is no host.
///
/// Default ports are dropped by the URL parser, so `https://a.com:443` and
/// `https://a.com` compare equal.
pub fn host_with_port(url: &Url) -> &str {
    &url[Position::BeforeHost..Position::AfterPort]
}

/// Builds the absolute form of `link` relative to `base`.
///
/// Rules, checked in order:
/// 1. `link` has a scheme: returned unchanged
/// 2. `link` starts with `//`: base scheme and `:` prepended
/// 3. `link` starts with `/`: base origin prepended
/// 4. anything else: base origin, `/`, then `link`
pub fn absolute_url(link: &str, base: &Url) -> String {
    if has_scheme(link) {
        return link.to_string();
    }
    if link.starts_with("//") {
        return format!("{}:{}", base.scheme(), link);
    }
    if link.starts_with('/') {
        return format!("{}{}", origin(base), link);
    }
    format!("{}/{}", origin(base), link)
}

/// Resolves `link` against `base` and parses the result.
///
/// # Errors
///
/// Returns the parser error if the resolved string is not a valid URL. The
/// absolute string is handed back alongside it so callers can report it.
pub fn resolve(link: &str, base: &Url) -> Result<Resolved, (String, url::ParseError)> {
    let absolute = absolute_url(link, base);
    match Url::parse(&absolute) {
        Ok(url) => Ok(Resolved { absolute, url }),
        Err(e) => Err((absolute, e)),
    }
}
