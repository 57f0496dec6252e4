use std::fmt;

use serde::{Deserialize, Serialize};

/// The file-type classes the harvester knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryKind {
    Document,
    ModelStp,
    ModelStep,
    ModelStl,
    ArchiveZip,
    ArchiveRar,
    ImageJpg,
    ImagePng,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 8] = [
        CategoryKind::Document,
        CategoryKind::ModelStp,
        CategoryKind::ModelStep,
        CategoryKind::ModelStl,
        CategoryKind::ArchiveZip,
        CategoryKind::ArchiveRar,
        CategoryKind::ImageJpg,
        CategoryKind::ImagePng,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKind::Document => "document",
            CategoryKind::ModelStp => "model-stp",
            CategoryKind::ModelStep => "model-step",
            CategoryKind::ModelStl => "model-stl",
            CategoryKind::ArchiveZip => "archive-zip",
            CategoryKind::ArchiveRar => "archive-rar",
            CategoryKind::ImageJpg => "image-jpg",
            CategoryKind::ImagePng => "image-png",
        }
    }

    /// Extension marker that a link must contain to belong to this category.
    pub fn marker(self) -> &'static str {
        match self {
            CategoryKind::Document => ".pdf",
            CategoryKind::ModelStp => ".stp",
            CategoryKind::ModelStep => ".step",
            CategoryKind::ModelStl => ".stl",
            CategoryKind::ArchiveZip => ".zip",
            CategoryKind::ArchiveRar => ".rar",
            CategoryKind::ImageJpg => ".jpg",
            CategoryKind::ImagePng => ".png",
        }
    }

    pub fn is_image(self) -> bool {
        matches!(self, CategoryKind::ImageJpg | CategoryKind::ImagePng)
    }

    fn default_directory(self) -> &'static str {
        match self {
            CategoryKind::Document => "PDFs",
            CategoryKind::ModelStp => "STPs",
            CategoryKind::ModelStep => "STEPs",
            CategoryKind::ModelStl => "STLs",
            CategoryKind::ArchiveZip => "ZIPs",
            CategoryKind::ArchiveRar => "RARs",
            CategoryKind::ImageJpg => "JPGs",
            CategoryKind::ImagePng => "PNGs",
        }
    }

    fn default_content_types(self) -> &'static [&'static str] {
        match self {
            CategoryKind::Document => &["application/pdf"],
            CategoryKind::ModelStp | CategoryKind::ModelStep => {
                &["model/step", "application/step", "application/octet-stream"]
            }
            CategoryKind::ModelStl => &[
                "application/vnd.ms-pki.stl",
                "model/stl",
                "application/sla",
                "application/octet-stream",
            ],
            CategoryKind::ArchiveZip => &[
                "application/zip",
                "application/x-zip-compressed",
                "application/octet-stream",
            ],
            CategoryKind::ArchiveRar => &[
                "application/vnd.rar",
                "application/x-rar-compressed",
                "application/octet-stream",
            ],
            CategoryKind::ImageJpg => &["image/jpeg", "image/jpg"],
            CategoryKind::ImagePng => &["image/png"],
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which elements and attributes carry links for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSelector {
    pub tag: String,
    pub attribute: String,
    pub marker: String,
    pub match_case: bool,
}

impl LinkSelector {
    pub fn new(
        tag: impl Into<String>,
        attribute: impl Into<String>,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attribute: attribute.into(),
            marker: marker.into(),
            match_case: true,
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.match_case = false;
        self
    }

    pub fn matches_value(&self, value: &str) -> bool {
        if self.match_case {
            value.contains(&self.marker)
        } else {
            value
                .to_ascii_lowercase()
                .contains(&self.marker.to_ascii_lowercase())
        }
    }
}

/// One row of the category table: how links are found and where they land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCategory {
    pub kind: CategoryKind,
    pub selector: LinkSelector,
    pub directory: String,
    /// Substrings of which at least one must occur in the response
    /// `Content-Type`. An empty list accepts any content type.
    pub accepted_content_types: Vec<String>,
}

impl LinkCategory {
    /// Anchor `href` links for documents, models and archives; image `src`
    /// links (matched without regard to case) for pictures.
    pub fn with_defaults(kind: CategoryKind) -> Self {
        let selector = if kind.is_image() {
            LinkSelector::new("img", "src", kind.marker()).case_insensitive()
        } else {
            LinkSelector::new("a", "href", kind.marker())
        };
        Self {
            kind,
            selector,
            directory: kind.default_directory().to_string(),
            accepted_content_types: kind
                .default_content_types()
                .iter()
                .map(|ct| ct.to_string())
                .collect(),
        }
    }

    pub fn default_table() -> Vec<LinkCategory> {
        CategoryKind::ALL
            .into_iter()
            .map(LinkCategory::with_defaults)
            .collect()
    }

    pub fn accepts_content_type(&self, content_type: Option<&str>) -> bool {
        content_type_accepted(&self.accepted_content_types, content_type)
    }
}

/// Substring match of a `Content-Type` value against an accept list,
/// ignoring ASCII case. A missing header only passes an empty list.
pub fn content_type_accepted(accepted: &[String], content_type: Option<&str>) -> bool {
    if accepted.is_empty() {
        return true;
    }
    let Some(content_type) = content_type else {
        return false;
    };
    let content_type = content_type.to_ascii_lowercase();
    accepted
        .iter()
        .any(|candidate| content_type.contains(&candidate.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stp_marker_does_not_match_step_links() {
        let stp = LinkCategory::with_defaults(CategoryKind::ModelStp);
        assert!(stp.selector.matches_value("/files/frame.stp"));
        assert!(!stp.selector.matches_value("/files/frame.step"));
    }

    #[test]
    fn image_selectors_ignore_case() {
        let jpg = LinkCategory::with_defaults(CategoryKind::ImageJpg);
        assert_eq!(jpg.selector.tag, "img");
        assert_eq!(jpg.selector.attribute, "src");
        assert!(jpg.selector.matches_value("/img/PHOTO.JPG"));
    }

    #[test]
    fn anchor_selectors_respect_case() {
        let pdf = LinkCategory::with_defaults(CategoryKind::Document);
        assert!(!pdf.selector.matches_value("/files/MANUAL.PDF"));
    }

    #[test]
    fn content_type_match_is_substring_based() {
        let pdf = LinkCategory::with_defaults(CategoryKind::Document);
        assert!(pdf.accepts_content_type(Some("application/pdf; charset=binary")));
        assert!(pdf.accepts_content_type(Some("Application/PDF")));
        assert!(!pdf.accepts_content_type(Some("text/html")));
        assert!(!pdf.accepts_content_type(None));
    }

    #[test]
    fn empty_accept_list_allows_anything() {
        assert!(content_type_accepted(&[], None));
        assert!(content_type_accepted(&[], Some("text/html")));
    }

    #[test]
    fn default_table_covers_every_kind_once() {
        let table = LinkCategory::default_table();
        let kinds: Vec<_> = table.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, CategoryKind::ALL.to_vec());
    }
}
