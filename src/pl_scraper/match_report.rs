use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::model::{MatchId, MatchRecord, Score};
use crate::pl_scraper::events::goal_minutes;
use crate::pl_scraper::stats::parse_stats_table;
use crate::pl_scraper::{MatchPage, PageSelectors, PageSource};

/// Format of the match date in the page header, e.g. `Sat 10 Aug 2019`.
const DATE_FORMAT: &str = "%a %d %b %Y";

/// Length of the `"Half Time: "` label preceding the half-time score.
const HALF_TIME_PREFIX_LEN: usize = 11;

/// Open a page session for `id` and extract its record.
///
/// The session lives only for the duration of this call and is released on
/// both the success and the error path.
#[instrument(skip(source, config))]
pub(crate) fn scrape_match<S: PageSource>(
    source: &S,
    config: &ScrapeConfig,
    id: MatchId,
) -> Result<MatchRecord> {
    let page = source.open(&config.match_url(id))?;
    extract_match(id, &page, &config.selectors)
}

/// Extract one match record from a loaded report page.
pub(crate) fn extract_match<P: MatchPage>(
    id: MatchId,
    page: &P,
    selectors: &PageSelectors,
) -> Result<MatchRecord> {
    page.click(&selectors.consent_banner)?;

    let date = parse_date(&page.wait_for_text(&selectors.date)?)?;
    let home_team = page.text(&selectors.home_team)?.trim().to_string();
    let away_team = page.text(&selectors.away_team)?.trim().to_string();
    let full_time = parse_score(&page.text(&selectors.full_time_score)?)?;
    let half_time = parse_half_time(&page.text(&selectors.half_time_score)?)?;

    let home_goals_mins = goal_minutes(&page.child_texts(&selectors.home_events)?)?;
    let away_goals_mins = goal_minutes(&page.child_texts(&selectors.away_events)?)?;

    page.click(&selectors.stats_tab)?;
    page.wait_for(&selectors.stats_table_rows)?;
    let (home_stats, away_stats) = parse_stats_table(&page.content()?, &home_team, &away_team)?;

    debug!(
        id,
        %date,
        home_goals = home_goals_mins.len(),
        away_goals = away_goals_mins.len(),
        "parsed match report"
    );

    Ok(MatchRecord {
        match_id: id,
        date,
        home_team,
        away_team,
        half_time,
        full_time,
        home_goals_mins,
        away_goals_mins,
        home_stats,
        away_stats,
    })
}

/// Parse a header date such as `Sat 10 Aug 2019`.
pub(crate) fn parse_date(text: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)?)
}

/// Parse a `home-away` score such as `4-1`.
pub(crate) fn parse_score(text: &str) -> Result<Score> {
    let (home, away) = text
        .trim()
        .split_once('-')
        .ok_or_else(|| ScrapeError::MalformedScore {
            text: text.to_string(),
        })?;
    Ok(Score {
        home: home.trim().parse()?,
        away: away.trim().parse()?,
    })
}

/// Parse the half-time line, e.g. `Half Time: 4-0`.
pub(crate) fn parse_half_time(text: &str) -> Result<Score> {
    let score: String = text.chars().skip(HALF_TIME_PREFIX_LEN).collect();
    parse_score(&score)
}
