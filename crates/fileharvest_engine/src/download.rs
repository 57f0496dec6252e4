use std::path::Path;

use engine_logging::{engine_info, engine_warn};
use fileharvest_core::{sanitize_filename, LinkCategory, ResolvedUrl};

use crate::fetch::Fetcher;
use crate::persist::{file_exists, AtomicFileWriter};
use crate::{DownloadError, DownloadOutcome};

/// Downloads single links for any category; the category only supplies the
/// accepted content types.
pub struct CategoryDownloader<'a> {
    fetcher: &'a dyn Fetcher,
}

impl<'a> CategoryDownloader<'a> {
    pub fn new(fetcher: &'a dyn Fetcher) -> Self {
        Self { fetcher }
    }

    pub async fn download(
        &self,
        url: &ResolvedUrl,
        category: &LinkCategory,
        output_dir: &Path,
    ) -> DownloadOutcome {
        let filename = sanitize_filename(url.as_str());
        if filename.is_empty() {
            return self.fail(url, category, DownloadError::EmptyFilename);
        }

        let path = output_dir.join(&filename);
        if file_exists(&path) {
            engine_info!("[{}] already present, skipping: {}", category.kind, path.display());
            return DownloadOutcome::Skipped { path };
        }

        let output = match self
            .fetcher
            .fetch(url.url().as_str(), &category.accepted_content_types)
            .await
        {
            Ok(output) => output,
            Err(err) => return self.fail(url, category, err.into()),
        };
        if output.bytes.is_empty() {
            return self.fail(url, category, DownloadError::EmptyBody);
        }

        let writer = AtomicFileWriter::new(output_dir.to_path_buf());
        match writer.write(&filename, &output.bytes) {
            Ok(path) => {
                let bytes = output.metadata.byte_len;
                engine_info!(
                    "[{}] downloaded {} bytes: {} -> {}",
                    category.kind,
                    bytes,
                    url,
                    path.display()
                );
                DownloadOutcome::Downloaded { path, bytes }
            }
            Err(err) => self.fail(url, category, err.into()),
        }
    }

    fn fail(
        &self,
        url: &ResolvedUrl,
        category: &LinkCategory,
        error: DownloadError,
    ) -> DownloadOutcome {
        engine_warn!("[{}] download failed for {}: {}", category.kind, url, error);
        DownloadOutcome::Failed {
            url: url.as_str().to_string(),
            error,
        }
    }
}
