use std::sync::Arc;

use tokio::task;
use tracing::{info, instrument, warn};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::model::{MatchId, MatchOutcome, MatchRecord, ScrapeFailure, ScrapeReport};
use crate::pl_scraper::{self, BrowserSource, PageSource};

/// The main entry point for scraping premierleague.com match reports.
///
/// `MatchScraper` visits match ids strictly one after another. Each id gets its
/// own page session, which is closed before the next id starts.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> pl_match_scraper::Result<()> {
/// use pl_match_scraper::{export, MatchScraper, ScrapeConfig};
///
/// let config = ScrapeConfig::default().with_ids(46605..=46614);
/// let scraper = MatchScraper::new(config.clone());
/// let report = scraper.run().await;
/// export::export(&report.dataset, &config)?;
/// println!("Number of errors: {}", report.errors.len());
/// # Ok(())
/// # }
/// ```
pub struct MatchScraper<S = BrowserSource> {
    source: Arc<S>,
    config: Arc<ScrapeConfig>,
}

impl MatchScraper<BrowserSource> {
    /// Create a scraper driving headless Chrome.
    pub fn new(config: ScrapeConfig) -> Self {
        let source = BrowserSource::new(&config);
        Self::with_source(config, source)
    }
}

impl<S> MatchScraper<S>
where
    S: PageSource + Send + Sync + 'static,
{
    /// Create a scraper using the provided [`PageSource`].
    pub fn with_source(config: ScrapeConfig, source: S) -> Self {
        Self {
            source: Arc::new(source),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Scrape a single match.
    ///
    /// The blocking page work runs on the blocking thread pool; any failure,
    /// including a panic in that work, is reported as a [`ScrapeFailure`].
    #[instrument(skip(self))]
    pub async fn scrape_match(&self, id: MatchId) -> MatchOutcome {
        self.try_scrape_match(id)
            .await
            .map_err(|error| ScrapeFailure { id, error })
    }

    async fn try_scrape_match(&self, id: MatchId) -> Result<MatchRecord> {
        let source = Arc::clone(&self.source);
        let config = Arc::clone(&self.config);
        task::spawn_blocking(move || pl_scraper::match_report::scrape_match(&*source, &config, id))
            .await
            .map_err(ScrapeError::from)?
    }

    /// Scrape every id of the configured range, in order.
    pub async fn run(&self) -> ScrapeReport {
        let ids = self.config.ids.clone();
        let total = ids.clone().count();
        let mut report = ScrapeReport::default();

        for (n, id) in ids.enumerate() {
            info!("[{}/{total}] scraping match {id}", n + 1);
            let outcome = self.scrape_match(id).await;
            match &outcome {
                Ok(_) => info!("ID {id} scraped."),
                Err(failure) => warn!(id, error = %failure.error, "failed to scrape match"),
            }
            report.push(outcome);
        }

        info!(
            scraped = report.dataset.len(),
            failed = report.errors.len(),
            "finished scraping"
        );
        report
    }
}
