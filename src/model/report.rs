use serde::Serialize;

use crate::error::ScrapeError;
use crate::model::{MatchId, MatchRecord};

/// A match that could not be scraped, with the cause.
#[derive(Debug)]
pub struct ScrapeFailure {
    pub id: MatchId,
    pub error: ScrapeError,
}

/// Outcome of scraping a single match id.
pub type MatchOutcome = std::result::Result<MatchRecord, ScrapeFailure>;

/// Everything a run produced: the dataset plus the ids that failed.
///
/// Every id of the scraped range lands in exactly one of the two.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub dataset: Vec<MatchRecord>,
    pub errors: Vec<ScrapeFailure>,
}

impl ScrapeReport {
    pub fn push(&mut self, outcome: MatchOutcome) {
        match outcome {
            Ok(record) => self.dataset.push(record),
            Err(failure) => self.errors.push(failure),
        }
    }

    /// Ids that failed extraction, in visiting order.
    pub fn error_ids(&self) -> Vec<MatchId> {
        self.errors.iter().map(|f| f.id).collect()
    }

    pub fn summary(&self) -> ScrapeSummary {
        ScrapeSummary {
            scraped: self.dataset.len(),
            failed: self.errors.len(),
            error_ids: self.error_ids(),
        }
    }
}

/// Final counts of a run, as reported to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeSummary {
    pub scraped: usize,
    pub failed: usize,
    pub error_ids: Vec<MatchId>,
}
