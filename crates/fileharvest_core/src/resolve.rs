use std::fmt;

use url::Url;

/// An absolute `http(s)` link ready to download.
///
/// `as_str` keeps the text as it was assembled from the page so filenames
/// derive from what the site published; `url` is the parsed form used for
/// the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    text: String,
    url: Url,
}

impl ResolvedUrl {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Turn a raw attribute value into an absolute URL.
///
/// `//host/path` gains an `https:` scheme, host-less links are prefixed with
/// `base_domain`. Returns `None` for anything that does not end up as a
/// well-formed `http`/`https` URL with a host.
pub fn resolve_link(raw: &str, base_domain: &str) -> Option<ResolvedUrl> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let text = if trimmed.starts_with("//") {
        format!("https:{trimmed}")
    } else if has_host(trimmed) {
        trimmed.to_string()
    } else {
        join_base(base_domain, trimmed)
    };

    let url = Url::parse(&text).ok()?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return None;
    }
    Some(ResolvedUrl { text, url })
}

fn has_host(link: &str) -> bool {
    Url::parse(link)
        .map(|url| url.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}

fn join_base(base_domain: &str, link: &str) -> String {
    let base = base_domain.trim().trim_end_matches('/');
    if link.starts_with('/') {
        format!("{base}{link}")
    } else {
        format!("{base}/{link}")
    }
}
