//! Summary statistics for numerical columns.

use tracing::debug;

use eda_model::{Dataset, EdaError, Quartiles, Result, SummaryStatistics, Value};

/// Linear-interpolation quantile of already sorted `values`.
///
/// Uses position `p * (n - 1)` between the closest ranks, the same rule as
/// the default in most dataframe libraries. Returns `None` for an empty slice.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let p = p.clamp(0.0, 1.0);
    let pos = p * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let fraction = pos - lower as f64;
    Some(sorted[lower] * (1.0 - fraction) + sorted[upper] * fraction)
}

/// Mean and sample standard deviation of `values` (non-empty).
///
/// When the direct sums overflow, both are recomputed on values divided by
/// the largest magnitude. A standard deviation that still exceeds `f64::MAX`
/// is reported as `None`.
fn mean_and_std(values: &[f64]) -> (f64, Option<f64>) {
    let n = values.len() as f64;
    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let sum: f64 = values.iter().sum();
    let mean = if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / scale).sum::<f64>() / n * scale
    };
    let std = (values.len() > 1)
        .then(|| {
            let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            if squares.is_finite() {
                (squares / (n - 1.0)).sqrt()
            } else {
                let scaled_mean = mean / scale;
                let squares: f64 = values
                    .iter()
                    .map(|v| (v / scale - scaled_mean).powi(2))
                    .sum();
                (squares / (n - 1.0)).sqrt() * scale
            }
        })
        .filter(|std| std.is_finite());
    (mean, std)
}

/// Min, max, mean, sample standard deviation and quartiles of the
/// non-missing values of `column`.
///
/// # Errors
///
/// - [`EdaError::UnknownColumn`] if the column is absent
/// - [`EdaError::NonNumericColumn`] if any non-missing value is text
pub fn summary_statistics(dataset: &Dataset, column: &str) -> Result<SummaryStatistics> {
    let mut values = Vec::with_capacity(dataset.row_count());
    for value in dataset.column(column)? {
        match value {
            Value::Number(number) => values.push(*number),
            Value::Missing => {}
            Value::Text(_) => return Err(EdaError::non_numeric(column)),
        }
    }
    if values.is_empty() {
        debug!(column, "no values for statistics");
        return Ok(SummaryStatistics::empty(column));
    }

    values.sort_by(f64::total_cmp);
    let count = values.len();
    let (mean, std) = mean_and_std(&values);
    let quartiles = match (
        quantile(&values, 0.25),
        quantile(&values, 0.5),
        quantile(&values, 0.75),
    ) {
        (Some(q1), Some(median), Some(q3)) => Some(Quartiles { q1, median, q3 }),
        _ => None,
    };

    Ok(SummaryStatistics {
        column: column.to_string(),
        count,
        min: values.first().copied(),
        max: values.last().copied(),
        mean: Some(mean),
        std,
        quartiles,
    })
}
