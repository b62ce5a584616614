//! Public suffix and registrable domain lookup.
//!
//! This module resolves hostnames against the Public Suffix List (PSL) to find
//! their public suffix and, for ICANN-managed suffixes, their registrable
//! domain (the suffix plus the one label in front of it).
//!
//! Key functions:
//! - `public_suffix()` - Returns the matched suffix and whether ICANN manages it
//! - `registrable_domain()` - Returns the domain an organization registered
//!
//! The list is compiled into the binary by the `psl` crate. It is never
//! mutated, so a single instance can be read from any number of threads.

use psl::{Psl, Type};

use crate::error_handling::DomainError;

/// Looks up the longest public suffix matching `host`.
///
/// # Arguments
///
/// * `list` - The Public Suffix List
/// * `host` - Lowercase hostname without port
///
/// # Returns
///
/// The suffix and `true` if it comes from the ICANN section of the list.
/// Private suffixes (e.g. "blogspot.com") and unlisted TLDs matched through
/// the implicit `*` rule report `false`. Returns `None` if no suffix matches,
/// which only happens for empty or malformed input.
pub fn public_suffix<P: Psl>(list: &P, host: &str) -> Option<(String, bool)> {
    let suffix = list.suffix(host.as_bytes())?;
    let icann = suffix.typ() == Some(Type::Icann);
    Some((String::from_utf8_lossy(suffix.as_bytes()).into_owned(), icann))
}

/// Computes the registrable domain of `host`.
///
/// # Arguments
///
/// * `list` - The Public Suffix List
/// * `host` - Lowercase hostname without port
///
/// # Returns
///
/// - `Ok(None)` for an empty host (URLs without an authority, e.g. `file:///`)
/// - the suffix plus one label when the suffix is ICANN-managed
///   ("www.example.co.uk" gives "example.co.uk")
/// - the suffix itself otherwise ("a.b.blogspot.com" gives "blogspot.com")
///
/// # Errors
///
/// Returns `DomainError::EmptyLabel` for a host with a leading dot or an
/// empty label in the middle (".example.com", "a..b.com"),
/// `DomainError::UnknownSuffix` when the list matches nothing, and
/// `DomainError::NoRegistrableDomain` when the host is a bare ICANN suffix
/// such as "co.uk".
pub fn registrable_domain<P: Psl>(list: &P, host: &str) -> Result<Option<String>, DomainError> {
    if host.is_empty() {
        return Ok(None);
    }
    if host.starts_with('.') || host.contains("..") {
        return Err(DomainError::EmptyLabel(host.to_string()));
    }

    let (suffix, icann) = public_suffix(list, host)
        .ok_or_else(|| DomainError::UnknownSuffix(host.to_string()))?;
    if !icann {
        return Ok(Some(suffix));
    }

    let domain = list
        .domain(host.as_bytes())
        .ok_or_else(|| DomainError::NoRegistrableDomain {
            host: host.to_string(),
            suffix,
        })?;
    Ok(Some(String::from_utf8_lossy(domain.as_bytes()).into_owned()))
}
