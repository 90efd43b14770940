//! Row-level checks.

use std::collections::HashSet;

use eda_model::{Dataset, MissingCount, Value};

/// Number of rows identical, across every column, to an earlier row.
///
/// Missing cells compare equal to each other. The first occurrence of a row
/// is never counted, so the result is `rows - distinct rows`.
pub fn duplicate_row_count(dataset: &Dataset) -> usize {
    let mut seen: HashSet<&[Value]> = HashSet::with_capacity(dataset.row_count());
    dataset
        .rows()
        .iter()
        .filter(|row| !seen.insert(row.as_slice()))
        .count()
}

/// Missing cells per column, in dataset column order.
pub fn missing_counts(dataset: &Dataset) -> Vec<MissingCount> {
    let mut counts = vec![0usize; dataset.column_count()];
    for row in dataset.rows() {
        for (idx, value) in row.iter().enumerate() {
            if value.is_missing() {
                counts[idx] += 1;
            }
        }
    }
    dataset
        .columns()
        .iter()
        .zip(counts)
        .map(|(column, count)| MissingCount {
            column: column.clone(),
            count,
        })
        .collect()
}
