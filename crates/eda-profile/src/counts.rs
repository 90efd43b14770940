//! Value frequencies, cross-tabulation and redundancy detection.

use std::collections::HashMap;

use tracing::debug;

use eda_model::{CrossTab, Dataset, RedundantPair, Result, Value, ValueCount};

/// Counts each distinct non-missing value of `column`.
///
/// The result is ordered by descending count; equal counts keep the order in
/// which the values first appear.
pub fn value_counts(dataset: &Dataset, column: &str) -> Result<ValueCount> {
    let mut index: HashMap<&Value, usize> = HashMap::new();
    let mut tally: Vec<(Value, usize)> = Vec::new();
    for value in dataset.column(column)? {
        if value.is_missing() {
            continue;
        }
        if let Some(&slot) = index.get(value) {
            tally[slot].1 += 1;
            continue;
        }
        index.insert(value, tally.len());
        tally.push((value.clone(), 1));
    }
    debug!(column, distinct = tally.len(), "counted values");
    Ok(ValueCount::from_tally(column, tally))
}

/// Value counts of the target column, used to spot class imbalance.
pub fn class_balance(dataset: &Dataset, target: &str) -> Result<ValueCount> {
    let balance = value_counts(dataset, target)?;
    if let Some(ratio) = balance.imbalance_ratio() {
        debug!(target, classes = balance.len(), ratio, "class balance");
    }
    Ok(balance)
}

/// Joint counts of `column_a` against `column_b`.
///
/// Labels on both axes follow first appearance. Rows where either value is
/// missing are skipped.
pub fn cross_tab(dataset: &Dataset, column_a: &str, column_b: &str) -> Result<CrossTab> {
    let a_idx = dataset.column_index(column_a)?;
    let b_idx = dataset.column_index(column_b)?;

    let mut row_index: HashMap<&Value, usize> = HashMap::new();
    let mut col_index: HashMap<&Value, usize> = HashMap::new();
    let mut row_labels: Vec<Value> = Vec::new();
    let mut column_labels: Vec<Value> = Vec::new();
    let mut cells: Vec<(usize, usize)> = Vec::new();

    for row in dataset.rows() {
        let (a, b) = (&row[a_idx], &row[b_idx]);
        if a.is_missing() || b.is_missing() {
            continue;
        }
        let r = *row_index.entry(a).or_insert_with(|| {
            row_labels.push(a.clone());
            row_labels.len() - 1
        });
        let c = *col_index.entry(b).or_insert_with(|| {
            column_labels.push(b.clone());
            column_labels.len() - 1
        });
        cells.push((r, c));
    }

    let mut counts = vec![vec![0usize; column_labels.len()]; row_labels.len()];
    for (r, c) in cells {
        counts[r][c] += 1;
    }
    Ok(CrossTab::new(
        column_a,
        column_b,
        row_labels,
        column_labels,
        counts,
    ))
}

/// Every unordered pair of `columns` whose cross-tab is a bijection, in
/// declaration order.
pub fn redundant_pairs<S: AsRef<str>>(
    dataset: &Dataset,
    columns: &[S],
) -> Result<Vec<RedundantPair>> {
    let mut pairs = Vec::new();
    for (i, a) in columns.iter().enumerate() {
        for b in &columns[i + 1..] {
            let (a, b) = (a.as_ref(), b.as_ref());
            let table = cross_tab(dataset, a, b)?;
            if table.is_redundant() {
                debug!(column_a = a, column_b = b, "redundant column pair");
                pairs.push(RedundantPair {
                    column_a: a.to_string(),
                    column_b: b.to_string(),
                    levels: table.row_labels().len(),
                });
            }
        }
    }
    Ok(pairs)
}
