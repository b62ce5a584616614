//! Error type definitions.
//!
//! This module defines the error types returned by link classification and
//! the counters used to track silently skipped markup.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while computing a registrable domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The host has a leading dot or two consecutive dots.
    #[error("empty label in host '{0}'")]
    EmptyLabel(String),

    /// The Public Suffix List produced no suffix for the host.
    #[error("no public suffix found for host '{0}'")]
    UnknownSuffix(String),

    /// The host is an ICANN public suffix with no owning label in front of it.
    #[error("cannot derive registrable domain for '{host}': host is the public suffix '{suffix}'")]
    NoRegistrableDomain {
        /// Host that was looked up
        host: String,
        /// ICANN suffix matched for the host
        suffix: String,
    },
}

/// Errors that abort classification of a document.
///
/// Every variant carries the input that triggered it so callers can report
/// which base or link string was at fault.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The base domain is not a parseable URL after scheme normalization.
    #[error("invalid base URL '{base}': {source}")]
    InvalidBaseUrl {
        /// Normalized base string
        base: String,
        /// Underlying parser error
        #[source]
        source: url::ParseError,
    },

    /// Registrable-domain computation failed for the base or a link host.
    #[error("domain lookup failed for host '{host}'{}: {source}", link_suffix(.link))]
    Domain {
        /// Host that failed the lookup
        host: String,
        /// Raw link string, `None` when the base host failed
        link: Option<String>,
        /// Underlying suffix error
        #[source]
        source: DomainError,
    },

    /// A resolved link is not itself a parseable URL.
    #[error("cannot parse link '{link}' (resolved to '{absolute}'): {source}")]
    Parse {
        /// Raw attribute value
        link: String,
        /// Absolute form produced by the resolver
        absolute: String,
        /// Underlying parser error
        #[source]
        source: url::ParseError,
    },
}

fn link_suffix(link: &Option<String>) -> String {
    match link {
        Some(link) => format!(" (link '{link}')"),
        None => String::new(),
    }
}

impl LinkError {
    /// Short, stable name of the error kind for user-facing reports.
    pub fn kind(&self) -> &'static str {
        match self {
            LinkError::InvalidBaseUrl { .. } => "InvalidBaseURLError",
            LinkError::Domain { .. } => "DomainError",
            LinkError::Parse { .. } => "ParseError",
        }
    }
}

/// Configuration validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for '{field}': {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

/// Reasons a start tag is passed over without producing a link.
///
/// None of these are errors: they describe noisy or non-link markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// Link-bearing tag written as `<tag ... />`
    SelfClosingTag,
    /// Link-bearing tag without its href/src attribute
    MissingAttribute,
    /// href/src present but empty
    EmptyAttribute,
    /// Resolved host contains quotes, `&`, `$`, `^`, `::` or `;`
    DisallowedHostSymbol,
}

/// Classification outcome of an accepted link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LinkKind {
    /// Same host (and port) as the base
    SameHost,
    /// Different host, same registrable domain
    CrossHost,
    /// Different registrable domain
    CrossOrganization,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SkipReason {
    /// Human-readable label used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::SelfClosingTag => "self-closing link tag",
            SkipReason::MissingAttribute => "missing link attribute",
            SkipReason::EmptyAttribute => "empty link attribute",
            SkipReason::DisallowedHostSymbol => "disallowed symbol in host",
        }
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LinkKind {
    /// Human-readable label used in statistics and CSV output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::SameHost => "same host",
            LinkKind::CrossHost => "cross host",
            LinkKind::CrossOrganization => "cross organization",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_link_error_kinds() {
        let base = LinkError::InvalidBaseUrl {
            base: "https://exa mple.com".to_string(),
            source: url::ParseError::InvalidDomainCharacter,
        };
        assert_eq!(base.kind(), "InvalidBaseURLError");

        let domain = LinkError::Domain {
            host: "co.uk".to_string(),
            link: Some("https://co.uk/".to_string()),
            source: DomainError::NoRegistrableDomain {
                host: "co.uk".to_string(),
                suffix: "co.uk".to_string(),
            },
        };
        assert_eq!(domain.kind(), "DomainError");

        let parse = LinkError::Parse {
            link: "http://[::1".to_string(),
            absolute: "http://[::1".to_string(),
            source: url::ParseError::InvalidIpv6Address,
        };
        assert_eq!(parse.kind(), "ParseError");
    }

    #[test]
    fn test_link_error_messages_name_the_input() {
        let err = LinkError::Parse {
            link: "http://exa mple.com".to_string(),
            absolute: "http://exa mple.com".to_string(),
            source: url::ParseError::InvalidDomainCharacter,
        };
        assert!(err.to_string().contains("'http://exa mple.com'"));

        let err = LinkError::Domain {
            host: "com".to_string(),
            link: Some("//com/x".to_string()),
            source: DomainError::NoRegistrableDomain {
                host: "com".to_string(),
                suffix: "com".to_string(),
            },
        };
        let message = err.to_string();
        assert!(message.contains("host 'com'"));
        assert!(message.contains("(link '//com/x')"));

        let err = LinkError::Domain {
            host: "com".to_string(),
            link: None,
            source: DomainError::UnknownSuffix("com".to_string()),
        };
        assert!(!err.to_string().contains("(link"));
    }

    #[test]
    fn test_link_error_exposes_source() {
        use std::error::Error;
        let err = LinkError::InvalidBaseUrl {
            base: "https://".to_string(),
            source: url::ParseError::EmptyHost,
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_all_counter_types_have_string_representation() {
        for reason in SkipReason::iter() {
            assert!(!reason.as_str().is_empty(), "{:?} should have a name", reason);
        }
        for kind in LinkKind::iter() {
            assert!(!kind.as_str().is_empty(), "{:?} should have a name", kind);
        }
    }
}
