use fileharvest_core::dedupe_links;
use pretty_assertions::assert_eq;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn first_occurrence_wins_and_order_is_kept() {
    let links = owned(&["/b.pdf", "/a.pdf", "/b.pdf", "/c.pdf", "/a.pdf"]);
    assert_eq!(dedupe_links(links), owned(&["/b.pdf", "/a.pdf", "/c.pdf"]));
}

#[test]
fn dedupe_is_idempotent() {
    let links = owned(&["x", "y", "x", "z", "y", "x"]);
    let once = dedupe_links(links);
    let twice = dedupe_links(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn near_duplicates_are_kept() {
    let links = owned(&["/a.pdf", " /a.pdf", "/A.pdf"]);
    assert_eq!(dedupe_links(links.clone()), links);
}
