use std::fmt;
use std::path::PathBuf;

use fileharvest_core::CategoryKind;

use crate::persist::PersistError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: Option<String> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => match content_type {
                Some(ct) => write!(f, "unsupported content type {ct}"),
                None => write!(f, "missing content type"),
            },
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("response body was empty")]
    EmptyBody,
    #[error("url does not yield a usable filename")]
    EmptyFilename,
    #[error("persist failed: {0}")]
    Persist(#[from] PersistError),
}

/// What happened to one link.
#[derive(Debug)]
pub enum DownloadOutcome {
    Downloaded { path: PathBuf, bytes: u64 },
    Skipped { path: PathBuf },
    Failed { url: String, error: DownloadError },
}

/// Per-category tallies for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTally {
    pub links: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub categories: Vec<(CategoryKind, CategoryTally)>,
}

impl RunSummary {
    pub fn tally(&self, kind: CategoryKind) -> CategoryTally {
        self.categories
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, t)| *t)
            .unwrap_or_default()
    }

    pub fn total(&self) -> CategoryTally {
        self.categories
            .iter()
            .fold(CategoryTally::default(), |acc, (_, t)| CategoryTally {
                links: acc.links + t.links,
                downloaded: acc.downloaded + t.downloaded,
                skipped: acc.skipped + t.skipped,
                failed: acc.failed + t.failed,
                dropped: acc.dropped + t.dropped,
            })
    }
}

impl CategoryTally {
    pub(crate) fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Downloaded { .. } => self.downloaded += 1,
            DownloadOutcome::Skipped { .. } => self.skipped += 1,
            DownloadOutcome::Failed { .. } => self.failed += 1,
        }
    }
}
