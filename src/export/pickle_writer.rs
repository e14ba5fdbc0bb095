use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_pickle::SerOptions;

use crate::error::Result;
use crate::export::LEADING_COLUMNS;
use crate::model::{MatchRecord, Statistic};

/// Values of one column, in dataset order.
#[derive(Serialize)]
#[serde(untagged)]
enum Column {
    Int(Vec<u32>),
    Text(Vec<String>),
    Minutes(Vec<Vec<u16>>),
    Float(Vec<f64>),
}

/// The dataset as a column-name → values dict, keys in export column order.
///
/// Loads in Python with `pd.DataFrame(pickle.load(f))`.
struct PickleTable<'a>(&'a [MatchRecord]);

impl PickleTable<'_> {
    fn leading(&self) -> [Column; 10] {
        let records = self.0;
        let ints = |f: fn(&MatchRecord) -> u32| Column::Int(records.iter().map(f).collect_vec());
        let texts =
            |f: fn(&MatchRecord) -> String| Column::Text(records.iter().map(f).collect_vec());
        let minutes = |f: fn(&MatchRecord) -> &Vec<u16>| {
            Column::Minutes(records.iter().map(|r| f(r).clone()).collect_vec())
        };
        [
            ints(|r| r.match_id),
            texts(|r| r.date.to_string()),
            texts(|r| r.home_team.clone()),
            texts(|r| r.away_team.clone()),
            ints(|r| r.half_time.home.into()),
            ints(|r| r.half_time.away.into()),
            ints(|r| r.full_time.home.into()),
            ints(|r| r.full_time.away.into()),
            minutes(|r| &r.home_goals_mins),
            minutes(|r| &r.away_goals_mins),
        ]
    }
}

impl Serialize for PickleTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let records = self.0;
        let mut map = serializer.serialize_map(None)?;
        for (name, column) in LEADING_COLUMNS.iter().zip(self.leading()) {
            map.serialize_entry(name, &column)?;
        }
        for stat in Statistic::checklist() {
            let home = records.iter().map(|r| r.home_stats.get(stat)).collect_vec();
            let away = records.iter().map(|r| r.away_stats.get(stat)).collect_vec();
            map.serialize_entry(&format!("home_{stat}"), &Column::Float(home))?;
            map.serialize_entry(&format!("away_{stat}"), &Column::Float(away))?;
        }
        map.end()
    }
}

/// Write the dataset as a pickled dict of columns.
pub fn write_pickle<W: Write>(dataset: &[MatchRecord], mut writer: W) -> Result<()> {
    serde_pickle::to_writer(&mut writer, &PickleTable(dataset), SerOptions::new())?;
    writer.flush()?;
    Ok(())
}

pub fn to_pickle_file(dataset: &[MatchRecord], path: &Path) -> Result<()> {
    write_pickle(dataset, BufWriter::new(File::create(path)?))
}
