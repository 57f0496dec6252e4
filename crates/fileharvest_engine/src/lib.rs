//! Fileharvest engine: page fetching, link extraction, downloads and the
//! sequential harvest pipeline.
mod audit;
mod decode;
mod download;
mod fetch;
mod links;
mod persist;
mod pipeline;
mod types;

pub use audit::{audit_documents, find_files_with_extension, validate_pdf, AuditError, AuditReport};
pub use decode::{decode_html, decode_page, DecodeError, DecodedHtml};
pub use download::CategoryDownloader;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use links::{LinkExtractor, ParsedPage};
pub use persist::{ensure_output_dir, file_exists, AtomicFileWriter, PersistError};
pub use pipeline::{Harvester, RunError};
pub use types::{
    CategoryTally, DownloadError, DownloadOutcome, FailureKind, FetchError, FetchMetadata,
    FetchOutput, RunSummary,
};
