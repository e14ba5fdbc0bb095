use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use crate::model::MatchId;
use crate::pl_scraper::PageSelectors;

/// First match of the 2019-20 season.
pub const FIRST_MATCH_ID: MatchId = 46605;
/// Last match available for the 2020-21 season at the time of curation.
pub const LAST_MATCH_ID: MatchId = 59174;

pub const BASE_URL: &str = "https://www.premierleague.com";
pub const CSV_PATH: &str = "data/premier_league_matches.csv";
pub const PICKLE_PATH: &str = "data/premier_league_matches.pkl";
pub const PARQUET_PATH: &str = "data/premier_league_matches.parquet";

/// Upper bound on every element wait.
pub const ELEMENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a scrape run.
///
/// `Default` yields the full curated season range and the standard output paths.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub ids: RangeInclusive<MatchId>,
    pub base_url: String,
    pub element_timeout: Duration,
    pub headless: bool,
    pub window_size: (u32, u32),
    pub csv_path: PathBuf,
    pub pickle_path: PathBuf,
    pub parquet_path: PathBuf,
    pub selectors: PageSelectors,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            ids: FIRST_MATCH_ID..=LAST_MATCH_ID,
            base_url: BASE_URL.to_string(),
            element_timeout: ELEMENT_TIMEOUT,
            headless: true,
            window_size: (1920, 1080),
            csv_path: PathBuf::from(CSV_PATH),
            pickle_path: PathBuf::from(PICKLE_PATH),
            parquet_path: PathBuf::from(PARQUET_PATH),
            selectors: PageSelectors::default(),
        }
    }
}

impl ScrapeConfig {
    pub fn with_ids(mut self, ids: RangeInclusive<MatchId>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_element_timeout(mut self, timeout: Duration) -> Self {
        self.element_timeout = timeout;
        self
    }

    pub fn with_output_paths(
        mut self,
        csv_path: impl Into<PathBuf>,
        pickle_path: impl Into<PathBuf>,
        parquet_path: impl Into<PathBuf>,
    ) -> Self {
        self.csv_path = csv_path.into();
        self.pickle_path = pickle_path.into();
        self.parquet_path = parquet_path.into();
        self
    }

    pub fn with_selectors(mut self, selectors: PageSelectors) -> Self {
        self.selectors = selectors;
        self
    }

    /// Report page URL for a match.
    pub fn match_url(&self, id: MatchId) -> String {
        format!("{}/match/{id}", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_url() {
        let config = ScrapeConfig::default();
        assert_eq!(
            config.match_url(46605),
            "https://www.premierleague.com/match/46605"
        );

        let config = config.with_base_url("http://localhost:8080/");
        assert_eq!(config.match_url(1), "http://localhost:8080/match/1");
    }

    #[test]
    fn test_default_range_and_paths() {
        let config = ScrapeConfig::default();
        assert_eq!(*config.ids.start(), 46605);
        assert_eq!(*config.ids.end(), 59174);
        assert_eq!(config.csv_path, PathBuf::from("data/premier_league_matches.csv"));
        assert_eq!(config.pickle_path, PathBuf::from("data/premier_league_matches.pkl"));
        assert_eq!(config.element_timeout, Duration::from_secs(30));
    }
}
