use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, ListArray, StringArray, UInt32Array, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema, UInt16Type};
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use parquet::arrow::ArrowWriter;
use strum::EnumCount;

use crate::error::Result;
use crate::export::columns;
use crate::model::{MatchRecord, Statistic};

fn goal_minutes_type() -> DataType {
    DataType::List(Arc::new(Field::new("item", DataType::UInt16, true)))
}

/// Arrow schema of the dataset, with the same column names as the CSV export.
pub fn schema() -> Schema {
    let leading = [
        DataType::UInt32,
        DataType::Utf8,
        DataType::Utf8,
        DataType::Utf8,
        DataType::UInt8,
        DataType::UInt8,
        DataType::UInt8,
        DataType::UInt8,
        goal_minutes_type(),
        goal_minutes_type(),
    ];
    let types = leading
        .into_iter()
        .chain(std::iter::repeat(DataType::Float64).take(2 * Statistic::COUNT));
    let fields = columns()
        .into_iter()
        .zip_eq(types)
        .map(|(name, data_type)| Field::new(name, data_type, false))
        .collect_vec();
    Schema::new(fields)
}

/// Convert the dataset into a single Arrow record batch.
pub fn record_batch(dataset: &[MatchRecord]) -> Result<RecordBatch> {
    let mut arrays: Vec<ArrayRef> = vec![
        Arc::new(UInt32Array::from_iter_values(
            dataset.iter().map(|r| r.match_id),
        )),
        Arc::new(StringArray::from_iter_values(
            dataset.iter().map(|r| r.date.to_string()),
        )),
        Arc::new(StringArray::from_iter_values(
            dataset.iter().map(|r| &r.home_team),
        )),
        Arc::new(StringArray::from_iter_values(
            dataset.iter().map(|r| &r.away_team),
        )),
        Arc::new(UInt8Array::from_iter_values(
            dataset.iter().map(|r| r.half_time.home),
        )),
        Arc::new(UInt8Array::from_iter_values(
            dataset.iter().map(|r| r.half_time.away),
        )),
        Arc::new(UInt8Array::from_iter_values(
            dataset.iter().map(|r| r.full_time.home),
        )),
        Arc::new(UInt8Array::from_iter_values(
            dataset.iter().map(|r| r.full_time.away),
        )),
        Arc::new(goal_minutes_array(
            dataset.iter().map(|r| &r.home_goals_mins),
        )),
        Arc::new(goal_minutes_array(
            dataset.iter().map(|r| &r.away_goals_mins),
        )),
    ];
    for stat in Statistic::checklist() {
        arrays.push(Arc::new(Float64Array::from_iter_values(
            dataset.iter().map(|r| r.home_stats.get(stat)),
        )));
        arrays.push(Arc::new(Float64Array::from_iter_values(
            dataset.iter().map(|r| r.away_stats.get(stat)),
        )));
    }

    Ok(RecordBatch::try_new(Arc::new(schema()), arrays)?)
}

fn goal_minutes_array<'a>(minutes: impl Iterator<Item = &'a Vec<u16>>) -> ListArray {
    ListArray::from_iter_primitive::<UInt16Type, _, _>(
        minutes.map(|m| Some(m.iter().copied().map(Some).collect_vec())),
    )
}

/// Write the dataset as a Parquet file with a single row group.
pub fn write_parquet<W: Write + Send>(dataset: &[MatchRecord], writer: W) -> Result<()> {
    let batch = record_batch(dataset)?;
    let mut writer = ArrowWriter::try_new(writer, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

pub fn to_parquet_file(dataset: &[MatchRecord], path: &Path) -> Result<()> {
    write_parquet(dataset, File::create(path)?)
}
