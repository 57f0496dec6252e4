use engine_logging::{engine_debug, engine_error, engine_info};
use fileharvest_core::{dedupe_links, resolve_link, HarvestConfig};

use crate::decode::decode_page;
use crate::download::CategoryDownloader;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::links::LinkExtractor;
use crate::persist::ensure_output_dir;
use crate::{CategoryTally, FetchError, RunSummary};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("could not build http client: {0}")]
    Client(FetchError),
    #[error("failed to fetch source page {url}: {source}")]
    SourcePage { url: String, source: FetchError },
}

/// Sequential scrape of one listing page: every category is extracted,
/// deduplicated, resolved and downloaded before the next one starts.
pub struct Harvester {
    config: HarvestConfig,
    fetcher: Box<dyn Fetcher>,
    extractor: LinkExtractor,
}

impl Harvester {
    pub fn new(config: HarvestConfig) -> Result<Self, RunError> {
        let fetcher = ReqwestFetcher::new(FetchSettings::from_config(&config))
            .map_err(RunError::Client)?;
        Ok(Self::with_fetcher(config, Box::new(fetcher)))
    }

    pub fn with_fetcher(config: HarvestConfig, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            config,
            fetcher,
            extractor: LinkExtractor::new(),
        }
    }

    /// Runs the whole scrape. Only a failed source page fetch is an error;
    /// per-link failures are logged and counted in the summary.
    pub async fn run(&self) -> Result<RunSummary, RunError> {
        self.prepare_output_dirs();

        let html = self.fetch_source_page().await?;
        let page = self.extractor.parse(&html);
        let downloader = CategoryDownloader::new(self.fetcher.as_ref());

        let mut summary = RunSummary::default();
        for category in &self.config.categories {
            let links = dedupe_links(page.links(&category.selector));
            engine_info!("[{}] {} unique links", category.kind, links.len());

            let output_dir = self.config.category_dir(category);
            let mut tally = CategoryTally {
                links: links.len(),
                ..CategoryTally::default()
            };
            for link in links {
                let Some(url) = resolve_link(&link, &self.config.base_domain) else {
                    engine_debug!("[{}] dropping malformed link {:?}", category.kind, link);
                    tally.dropped += 1;
                    continue;
                };
                let outcome = downloader.download(&url, category, &output_dir).await;
                tally.record(&outcome);
            }
            summary.categories.push((category.kind, tally));
        }

        let total = summary.total();
        engine_info!(
            "Run finished: {} downloaded, {} skipped, {} failed, {} dropped",
            total.downloaded,
            total.skipped,
            total.failed,
            total.dropped
        );
        Ok(summary)
    }

    fn prepare_output_dirs(&self) {
        for category in &self.config.categories {
            let dir = self.config.category_dir(category);
            if let Err(err) = ensure_output_dir(&dir) {
                engine_error!("[{}] cannot prepare {}: {}", category.kind, dir.display(), err);
            }
        }
    }

    async fn fetch_source_page(&self) -> Result<String, RunError> {
        let url = &self.config.source_url;
        engine_info!("Scraping {}", url);
        let output = self
            .fetcher
            .fetch(url, &[])
            .await
            .map_err(|source| RunError::SourcePage {
                url: url.clone(),
                source,
            })?;
        Ok(decode_page(
            &output.bytes,
            output.metadata.content_type.as_deref(),
        ))
    }
}
