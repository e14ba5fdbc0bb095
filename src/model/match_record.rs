use chrono::NaiveDate;
use serde::Serialize;

use crate::model::TeamStats;

/// Identifier of a match on premierleague.com (`/match/{id}`).
pub type MatchId = u32;

/// A `home-away` score pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

/// One scraped match: a single row of the exported dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub match_id: MatchId,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub half_time: Score,
    pub full_time: Score,
    /// Goal minutes in event-log order; not sorted, duplicates kept.
    pub home_goals_mins: Vec<u16>,
    pub away_goals_mins: Vec<u16>,
    pub home_stats: TeamStats,
    pub away_stats: TeamStats,
}
