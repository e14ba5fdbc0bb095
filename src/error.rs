use ::scraper::error::SelectorErrorKind;
use std::num::{ParseFloatError, ParseIntError};

/// All errors that can occur while scraping or exporting match reports.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// The browser could not be configured for launch.
    #[error("invalid browser launch options: {0}")]
    LaunchOptions(String),

    /// A browser operation failed (launch, navigation, element wait, click, ...).
    #[error("browser failed to {action}: {reason:#}")]
    Browser {
        action: &'static str,
        reason: anyhow::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// Failed to parse an integer from scraped text.
    #[error("failed to parse integer: {0}")]
    IntParse(#[from] ParseIntError),

    /// Failed to parse a statistic value from scraped text.
    #[error("failed to parse number: {0}")]
    FloatParse(#[from] ParseFloatError),

    /// Failed to parse a date from scraped text.
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// An expected element was not found on the page.
    #[error("expected element not found: {context}")]
    ElementNotFound { context: &'static str },

    /// A score did not have the `home-away` shape.
    #[error("malformed score text: {text:?}")]
    MalformedScore { text: String },

    /// The statistics table has no value column for a team.
    #[error("statistics table has no column for team {team:?}")]
    StatsColumnMissing { team: String },

    /// The blocking scrape task panicked or was cancelled.
    #[error("scrape task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    /// Writing the CSV file failed.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset could not be converted into an Arrow record batch.
    #[error("arrow conversion failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Writing the Parquet file failed.
    #[error("parquet export failed: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Serializing the pickled table failed.
    #[error("pickle export failed: {0}")]
    Pickle(#[from] serde_pickle::Error),

    /// Creating an output directory or file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl<'a> From<SelectorErrorKind<'a>> for ScrapeError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        ScrapeError::Selector(err.to_string())
    }
}

impl ScrapeError {
    /// Wrap a `headless_chrome` failure with the action that was attempted.
    pub(crate) fn browser(action: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |reason| ScrapeError::Browser { action, reason }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
