//! Link-bearing tag recognition.

use super::tokens::StartTag;

/// Attribute that carries the link for a given tag name, if any.
///
/// `form` is recognised but not supported yet: its `action` needs the
/// `method` attribute to be meaningful, so forms never produce a link.
pub fn link_attribute(tag_name: &str) -> Option<&'static str> {
    match tag_name {
        "a" | "link" => Some("href"),
        "img" | "script" | "iframe" => Some("src"),
        "form" => None,
        _ => None,
    }
}

/// Extracts the raw link value from a start tag.
///
/// Returns `None` for tags that carry no link, or when the link attribute is
/// absent. A present but empty attribute yields `Some("")`; deciding what to
/// do with it is left to the caller.
pub fn extract_link(tag: &StartTag) -> Option<&str> {
    link_attribute(&tag.name).and_then(|attr| tag.attr(attr))
}
