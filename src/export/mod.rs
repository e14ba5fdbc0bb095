mod csv_writer;
mod parquet_writer;
mod pickle_writer;

pub use csv_writer::{to_csv_file, write_csv};
pub use parquet_writer::{record_batch, to_parquet_file, write_parquet};
pub use pickle_writer::{to_pickle_file, write_pickle};

use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::model::{MatchRecord, Statistic};

/// Leading columns of every exported row, before the per-statistic pairs.
pub const LEADING_COLUMNS: [&str; 10] = [
    "match_id",
    "date",
    "home_team",
    "away_team",
    "home_ht_score",
    "away_ht_score",
    "home_ft_score",
    "away_ft_score",
    "home_goals_mins",
    "away_goals_mins",
];

/// The full, fixed export header: leading columns, then `home_{stat}` and
/// `away_{stat}` for each checklist statistic.
pub fn columns() -> Vec<String> {
    LEADING_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(
            Statistic::checklist()
                .flat_map(|stat| [format!("home_{stat}"), format!("away_{stat}")]),
        )
        .collect()
}

/// Write the dataset to the CSV, pickle and Parquet paths of `config`,
/// overwriting all three.
#[instrument(skip_all, fields(rows = dataset.len()))]
pub fn export(dataset: &[MatchRecord], config: &ScrapeConfig) -> Result<()> {
    create_parent_dir(&config.csv_path)?;
    to_csv_file(dataset, &config.csv_path)?;
    info!(path = %config.csv_path.display(), "csv file exported");

    create_parent_dir(&config.pickle_path)?;
    to_pickle_file(dataset, &config.pickle_path)?;
    info!(path = %config.pickle_path.display(), "pickle file exported");

    create_parent_dir(&config.parquet_path)?;
    to_parquet_file(dataset, &config.parquet_path)?;
    info!(path = %config.parquet_path.display(), "parquet file exported");
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(fs::create_dir_all(parent)?),
        _ => Ok(()),
    }
}
