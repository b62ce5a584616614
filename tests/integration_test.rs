//! Fixture-driven tests of the public classification API.

mod helpers;

use helpers::load_fixture;
use outlinks::{
    cross_host_links, cross_organization_links, links, links_with, ClassificationStats, LinkKind,
    SkipReason,
};

const BASE: &str = "https://google.com";

#[test]
fn test_links_html_fixture_count() {
    let page = load_fixture("links.html");
    let found = links(&page, BASE).expect("fixture should classify");
    assert_eq!(found.len(), 20, "wrong links size {}", found.len());
}

#[test]
fn test_links_html_fixture_never_relative() {
    let page = load_fixture("links.html");
    for link in links(&page, BASE).unwrap() {
        assert!(
            link.absolute.starts_with("http"),
            "relative URL {}",
            link.absolute
        );
        assert!(!link.raw.is_empty());
    }
}

#[test]
fn test_links_json_fixture_is_empty() {
    let page = load_fixture("data.json");
    let found = links(&page, BASE).expect("JSON input is not an error");
    assert!(found.is_empty(), "wrong links size {}", found.len());
}

#[test]
fn test_cross_organization_links_html_fixture() {
    let page = load_fixture("links.html");
    let external = cross_organization_links(&page, BASE).unwrap();
    assert_eq!(external.len(), 6, "wrong links size {}", external.len());
    for link in &external {
        let host = url::Url::parse(link).unwrap().host_str().unwrap().to_string();
        assert!(!host.contains("google.com"), "not external link {link}");
    }
    assert_eq!(
        external,
        vec![
            "https://www.gstatic.com/og/_/js/k=og.js",
            "https://www.youtube.com/",
            "http://www.blogger.com/",
            "https://ssl.gstatic.com/gb/images/p1.png",
            "https://support.google.co.uk/",
            "https://github.com/google",
        ]
    );
}

#[test]
fn test_cross_host_links_html_fixture() {
    let page = load_fixture("links.html");
    let cross_host = cross_host_links(&page, BASE).unwrap();
    assert_eq!(cross_host.len(), 13);
    assert!(cross_host.contains(&"https://play.google.com/store".to_string()));
    assert!(!cross_host.contains(&"https://google.com/preferences".to_string()));
}

#[test]
fn test_cross_organization_is_registrable_domain_inequality() {
    let page = load_fixture("links.html");
    for link in links(&page, BASE).unwrap() {
        let same_org = link.registrable_domain.as_deref() == Some("google.com");
        assert_eq!(link.cross_organization, !same_org, "{}", link.absolute);
    }
}

#[test]
fn test_fixture_statistics() {
    let page = load_fixture("links.html");
    let stats = ClassificationStats::new();
    links_with(&psl::List, &page, BASE, &stats).unwrap();

    assert_eq!(stats.get_accepted_count(LinkKind::SameHost), 7);
    assert_eq!(stats.get_accepted_count(LinkKind::CrossHost), 7);
    assert_eq!(stats.get_accepted_count(LinkKind::CrossOrganization), 6);

    assert_eq!(stats.get_skipped_count(SkipReason::SelfClosingTag), 2);
    assert_eq!(stats.get_skipped_count(SkipReason::EmptyAttribute), 1);
    assert_eq!(stats.get_skipped_count(SkipReason::MissingAttribute), 2);
    assert_eq!(stats.get_skipped_count(SkipReason::DisallowedHostSymbol), 2);
}

#[test]
fn test_base_without_scheme_matches_https_base() {
    let page = load_fixture("links.html");
    assert_eq!(links(&page, "google.com").unwrap(), links(&page, BASE).unwrap());
}

#[test]
fn test_classification_from_many_threads() {
    let page = std::sync::Arc::new(load_fixture("links.html"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let page = std::sync::Arc::clone(&page);
            std::thread::spawn(move || links(&page, BASE).map(|l| l.len()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("worker panicked").unwrap(), 20);
    }
}
