use ::scraper::{Html, Selector};
use itertools::Itertools;
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::model::{Statistic, TeamStats};
use crate::pl_scraper::element_text;

/// Column holding the statistic label; the team columns flank it.
const LABEL_COLUMN: usize = 1;

/// Parse the statistics table from a rendered match page.
///
/// The last `<table>` of the document is the statistics table. Its header row
/// (the `<thead>` row, or the first row when there is no `<thead>`) names the
/// two teams; each body row reads `home value | label | away value`.
/// Rows for statistics outside the checklist are skipped and checklist entries
/// missing from the table stay at zero.
pub(crate) fn parse_stats_table(
    html: &str,
    home_team: &str,
    away_team: &str,
) -> Result<(TeamStats, TeamStats)> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table")?;
    let table = document
        .select(&table_selector)
        .last()
        .ok_or(ScrapeError::ElementNotFound {
            context: "statistics table (last table on page)",
        })?;

    let header_selector = Selector::parse("thead tr th")?;
    let row_selector = Selector::parse("tr")?;
    let cell_selector = Selector::parse("td, th")?;
    let mut headers = table
        .select(&header_selector)
        .map(|th| element_text(&th))
        .collect_vec();
    if headers.is_empty() {
        headers = table
            .select(&row_selector)
            .next()
            .map(|row| row.select(&cell_selector).map(|cell| element_text(&cell)).collect_vec())
            .unwrap_or_default();
    }
    let column_of = |team: &str| {
        headers
            .iter()
            .position(|h| h == team)
            .ok_or_else(|| ScrapeError::StatsColumnMissing {
                team: team.to_string(),
            })
    };
    let home_column = column_of(home_team)?;
    let away_column = column_of(away_team)?;

    let body_selector = Selector::parse("tbody tr")?;
    let mut home = TeamStats::default();
    let mut away = TeamStats::default();
    let mut matched = 0;
    for row in table.select(&body_selector) {
        let cells = row
            .select(&cell_selector)
            .map(|cell| element_text(&cell))
            .collect_vec();
        let (Some(label), Some(home_value), Some(away_value)) = (
            cells.get(LABEL_COLUMN),
            cells.get(home_column),
            cells.get(away_column),
        ) else {
            continue;
        };
        let Some(stat) = Statistic::from_label(label) else {
            continue;
        };
        home.set(stat, parse_stat_value(home_value)?);
        away.set(stat, parse_stat_value(away_value)?);
        matched += 1;
    }

    debug!(matched, "parsed statistics table");
    Ok((home, away))
}

/// Parse a statistic cell such as `"65.3"`, `"12"` or `"1,204"`.
fn parse_stat_value(text: &str) -> Result<f64> {
    let value = text.trim().trim_end_matches('%').trim().replace(',', "");
    Ok(value.parse::<f64>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pl_scraper::testing::STATS_PAGE;

    #[test]
    fn test_parse_stats_table() {
        let (home, away) = parse_stats_table(STATS_PAGE, "Liverpool", "Norwich").unwrap();
        assert_eq!(home.get(Statistic::Possession), 65.3);
        assert_eq!(away.get(Statistic::Possession), 34.7);
        assert_eq!(home.get(Statistic::ShotsOnTarget), 7.0);
        assert_eq!(away.get(Statistic::Shots), 12.0);
        assert_eq!(home.get(Statistic::YellowCards), 1.0);
    }

    #[test]
    fn test_missing_statistics_default_to_zero() {
        let (home, away) = parse_stats_table(STATS_PAGE, "Liverpool", "Norwich").unwrap();
        for stat in [
            Statistic::Touches,
            Statistic::Passes,
            Statistic::Tackles,
            Statistic::Clearances,
            Statistic::Corners,
            Statistic::Offsides,
            Statistic::RedCards,
            Statistic::FoulsConceded,
        ] {
            assert_eq!(home.get(stat), 0.0, "home {stat}");
            assert_eq!(away.get(stat), 0.0, "away {stat}");
        }
    }

    #[test]
    fn test_team_column_must_exist() {
        let result = parse_stats_table(STATS_PAGE, "Liverpool", "Arsenal");
        assert!(matches!(
            result,
            Err(ScrapeError::StatsColumnMissing { team }) if team == "Arsenal"
        ));
    }

    #[test]
    fn test_header_row_without_thead() {
        let html = r#"<html><body><table>
            <tr><th>Arsenal</th><th></th><th>Chelsea</th></tr>
            <tr><td>48.2</td><td>Possession %</td><td>51.8</td></tr>
            <tr><td>3</td><td>Corners</td><td>9</td></tr>
        </table></body></html>"#;
        let (home, away) = parse_stats_table(html, "Arsenal", "Chelsea").unwrap();
        assert_eq!(home.get(Statistic::Possession), 48.2);
        assert_eq!(away.get(Statistic::Possession), 51.8);
        assert_eq!(away.get(Statistic::Corners), 9.0);
    }

    #[test]
    fn test_page_without_table() {
        let result = parse_stats_table("<html><body></body></html>", "A", "B");
        assert!(matches!(result, Err(ScrapeError::ElementNotFound { .. })));
    }

    #[test]
    fn test_parse_stat_value() {
        assert_eq!(parse_stat_value(" 52.1% ").unwrap(), 52.1);
        assert_eq!(parse_stat_value("1,204").unwrap(), 1204.0);
        assert!(parse_stat_value("-").is_err());
    }
}
