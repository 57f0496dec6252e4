//! Post-download check of the document directory.
//!
//! Every `.pdf` below the directory is opened with `lopdf`. Files that do not
//! parse, or parse to a document without pages, are removed so the next run
//! fetches them again. Valid files with uppercase letters in their name are
//! reported, since the sanitizer never produces such names.

use std::fs;
use std::path::{Path, PathBuf};

use engine_logging::{engine_error, engine_info, engine_warn};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("cannot read document {path}: {message}")]
    Unreadable { path: PathBuf, message: String },
    #[error("document {0} has no pages")]
    NoPages(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub valid: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub removal_failed: Vec<PathBuf>,
    pub uppercase_names: Vec<PathBuf>,
}

impl AuditReport {
    pub fn checked(&self) -> usize {
        self.valid.len() + self.removed.len() + self.removal_failed.len()
    }
}

/// Checks that `path` is a PDF with at least one page.
pub fn validate_pdf(path: &Path) -> Result<usize, AuditError> {
    let document = lopdf::Document::load(path).map_err(|err| AuditError::Unreadable {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let pages = document.get_pages().len();
    if pages == 0 {
        return Err(AuditError::NoPages(path.to_path_buf()));
    }
    Ok(pages)
}

/// Files below `root` whose name ends with `extension` (case-sensitive),
/// in walk order. A missing root yields nothing.
pub fn find_files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    let suffix = if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    };

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                engine_warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(&suffix))
        .map(|entry| entry.into_path())
        .collect()
}

pub fn audit_documents(root: &Path) -> AuditReport {
    let mut report = AuditReport::default();
    let files = find_files_with_extension(root, ".pdf");
    if files.is_empty() {
        engine_info!("No .pdf files found under {}", root.display());
        return report;
    }
    engine_info!("Auditing {} documents under {}", files.len(), root.display());

    for path in files {
        if let Err(err) = validate_pdf(&path) {
            engine_warn!("Invalid document: {}; deleting", err);
            match fs::remove_file(&path) {
                Ok(()) => report.removed.push(path),
                Err(err) => {
                    engine_error!("Could not delete {}: {}", path.display(), err);
                    report.removal_failed.push(path);
                }
            }
            continue;
        }

        if has_uppercase_name(&path) {
            engine_warn!("Uppercase letters in filename: {}", path.display());
            report.uppercase_names.push(path.clone());
        }
        report.valid.push(path);
    }
    report
}

fn has_uppercase_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().chars().any(char::is_uppercase))
        .unwrap_or(false)
}
