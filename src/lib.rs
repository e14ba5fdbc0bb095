//! Scrape premierleague.com match reports into a flat match dataset.
//!
//! [`MatchScraper`] visits a range of match ids one at a time with a headless
//! browser, and [`export`] writes the collected records as CSV and Parquet.

pub use client::MatchScraper;
pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};

mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
mod pl_scraper;

pub use pl_scraper::{BrowserPage, BrowserSource, MatchPage, PageSelectors, PageSource};
