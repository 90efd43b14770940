//! Polars bridge.
//!
//! Converts a [`Dataset`] into a polars `DataFrame`, mainly so projections
//! can be written back out with polars' CSV writer.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use eda_model::{Dataset, Value};

/// Builds a `DataFrame` with one series per dataset column.
///
/// Columns holding at least one number and no text become nullable `Float64`
/// series; all other columns, including all-missing ones, become nullable
/// `String` series. Missing values map to nulls.
pub fn to_dataframe(dataset: &Dataset) -> PolarsResult<DataFrame> {
    let mut columns = Vec::with_capacity(dataset.column_count());
    for (idx, name) in dataset.columns().iter().enumerate() {
        let values = dataset.rows().iter().map(|row| &row[idx]);
        let numeric = values.clone().any(|value| matches!(value, Value::Number(_)))
            && values.clone().all(|value| !matches!(value, Value::Text(_)));
        let series = if numeric {
            let data: Vec<Option<f64>> = values.map(Value::as_f64).collect();
            Series::new(name.as_str().into(), data)
        } else {
            let data: Vec<Option<String>> = values
                .map(|value| (!value.is_missing()).then(|| value.to_string()))
                .collect();
            Series::new(name.as_str().into(), data)
        };
        columns.push(series.into_column());
    }
    DataFrame::new(columns)
}

/// Writes the dataset as CSV (header included) to `path`.
pub fn write_csv(dataset: &Dataset, path: &Path) -> PolarsResult<()> {
    let mut df = to_dataframe(dataset)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote csv"
    );
    Ok(())
}
