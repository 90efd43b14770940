//! Column projection.

use tracing::debug;

use eda_model::{Dataset, Result};

/// Returns a new dataset with only the named columns, in the requested
/// order. Rows keep their order. A name requested twice is kept once.
///
/// # Errors
///
/// [`EdaError::UnknownColumn`](eda_model::EdaError::UnknownColumn) if any
/// name is absent.
pub fn project<S: AsRef<str>>(dataset: &Dataset, columns: &[S]) -> Result<Dataset> {
    let mut names: Vec<String> = Vec::with_capacity(columns.len());
    let mut indices: Vec<usize> = Vec::with_capacity(columns.len());
    for name in columns {
        let name = name.as_ref();
        let idx = dataset.column_index(name)?;
        if indices.contains(&idx) {
            continue;
        }
        names.push(name.to_string());
        indices.push(idx);
    }

    let rows = dataset
        .rows()
        .iter()
        .map(|row| indices.iter().map(|&idx| row[idx].clone()).collect())
        .collect();
    debug!(columns = ?names, rows = dataset.row_count(), "projected dataset");
    Dataset::new(names, rows)
}
