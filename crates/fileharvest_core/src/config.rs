use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::category::{CategoryKind, LinkCategory};

pub const DEFAULT_SOURCE_URL: &str = "https://caddxfpv.com/pages/download-center";
pub const DEFAULT_BASE_DOMAIN: &str = "https://caddxfpv.com";

/// Everything a harvest run needs to know. Missing fields in a config file
/// fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    pub source_url: String,
    pub base_domain: String,
    pub output_root: PathBuf,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub redirect_limit: usize,
    pub max_body_bytes: u64,
    pub categories: Vec<LinkCategory>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            base_domain: DEFAULT_BASE_DOMAIN.to_string(),
            output_root: PathBuf::from("."),
            request_timeout_secs: 180,
            connect_timeout_secs: 10,
            redirect_limit: 10,
            max_body_bytes: 512 * 1024 * 1024,
            categories: LinkCategory::default_table(),
        }
    }
}

impl HarvestConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn category_dir(&self, category: &LinkCategory) -> PathBuf {
        self.output_root.join(&category.directory)
    }

    pub fn category(&self, kind: CategoryKind) -> Option<&LinkCategory> {
        self.categories.iter().find(|c| c.kind == kind)
    }

    /// Directory holding downloaded documents, if the document category is
    /// configured.
    pub fn document_dir(&self) -> Option<PathBuf> {
        self.category(CategoryKind::Document)
            .map(|c| self.category_dir(c))
    }

    pub fn with_output_root(mut self, root: impl AsRef<Path>) -> Self {
        self.output_root = root.as_ref().to_path_buf();
        self
    }
}
