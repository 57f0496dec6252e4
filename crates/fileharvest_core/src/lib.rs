//! Fileharvest core: category table, configuration model and the pure link
//! transforms (sanitizing, resolving, deduplicating).
mod category;
mod config;
mod dedupe;
mod resolve;
mod sanitize;

pub use category::{content_type_accepted, CategoryKind, LinkCategory, LinkSelector};
pub use config::{HarvestConfig, DEFAULT_BASE_DOMAIN, DEFAULT_SOURCE_URL};
pub use dedupe::dedupe_links;
pub use resolve::{resolve_link, ResolvedUrl};
pub use sanitize::{sanitize_filename, CATEGORY_MARKERS};
