use std::fs::File;
use std::io::Write;
use std::path::Path;

use itertools::Itertools;

use crate::error::Result;
use crate::export::columns;
use crate::model::MatchRecord;

/// Write the header row and one row per record.
///
/// Output depends only on `dataset`, so exporting the same data twice yields
/// identical bytes.
pub fn write_csv<W: Write>(dataset: &[MatchRecord], writer: W) -> Result<()> {
    let mut writer = ::csv::Writer::from_writer(writer);
    writer.write_record(columns())?;
    for record in dataset {
        writer.write_record(csv_row(record))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn to_csv_file(dataset: &[MatchRecord], path: &Path) -> Result<()> {
    write_csv(dataset, File::create(path)?)
}

fn csv_row(record: &MatchRecord) -> Vec<String> {
    let mut row = vec![
        record.match_id.to_string(),
        record.date.to_string(),
        record.home_team.clone(),
        record.away_team.clone(),
        record.half_time.home.to_string(),
        record.half_time.away.to_string(),
        record.full_time.home.to_string(),
        record.full_time.away.to_string(),
        format_minutes(&record.home_goals_mins),
        format_minutes(&record.away_goals_mins),
    ];
    row.extend(
        record
            .home_stats
            .values()
            .zip(record.away_stats.values())
            .flat_map(|(home, away)| [home.to_string(), away.to_string()]),
    );
    row
}

/// Render goal minutes as a list literal, e.g. `[7, 45]`.
fn format_minutes(minutes: &[u16]) -> String {
    format!("[{}]", minutes.iter().join(", "))
}
