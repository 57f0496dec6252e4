use std::collections::HashSet;

/// Drop repeated links, keeping the first occurrence of each in order.
pub fn dedupe_links<I>(links: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}
