use fileharvest_core::resolve_link;
use pretty_assertions::assert_eq;

const BASE: &str = "https://caddxfpv.com";

#[test]
fn protocol_relative_links_get_https() {
    let resolved = resolve_link("//cdn.example.com/a.png", BASE).unwrap();
    assert_eq!(resolved.as_str(), "https://cdn.example.com/a.png");
    assert_eq!(resolved.url().host_str(), Some("cdn.example.com"));
}

#[test]
fn host_less_links_get_base_domain() {
    let resolved = resolve_link("/files/a.pdf", BASE).unwrap();
    assert_eq!(resolved.as_str(), "https://caddxfpv.com/files/a.pdf");
}

#[test]
fn absolute_links_are_unchanged() {
    let url = "https://example.com/downloads/frame.zip";
    assert_eq!(resolve_link(url, BASE).unwrap().as_str(), url);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let resolved = resolve_link("  \n/files/a.pdf\t ", BASE).unwrap();
    assert_eq!(resolved.as_str(), "https://caddxfpv.com/files/a.pdf");
}

#[test]
fn invalid_links_are_dropped() {
    assert!(resolve_link("", BASE).is_none());
    assert!(resolve_link("   ", BASE).is_none());
    assert!(resolve_link("ftp://files.example.com/a.pdf", BASE).is_none());
    assert!(resolve_link("/files/a.pdf", "not a base").is_none());
}
