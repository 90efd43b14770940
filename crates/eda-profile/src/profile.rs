//! Full dataset profile.

use std::time::Instant;

use tracing::{info, info_span};

use eda_model::{ColumnSpec, Dataset, EdaError, ProfileReport, Result};

use crate::counts::{class_balance, redundant_pairs, value_counts};
use crate::rows::{duplicate_row_count, missing_counts};
use crate::stats::summary_statistics;

/// Profiles `dataset` under `spec`.
///
/// Pure and deterministic: the same dataset and spec always give an equal
/// report. The first failure aborts the run; there is no partial report.
///
/// # Errors
///
/// - [`EdaError::UnknownColumn`] if a declared column is not in the dataset
/// - [`EdaError::NonNumericColumn`] if a numerical column holds text
pub fn profile(dataset: &Dataset, spec: &ColumnSpec) -> Result<ProfileReport> {
    let span = info_span!(
        "profile",
        rows = dataset.row_count(),
        columns = dataset.column_count()
    );
    let _guard = span.enter();
    let start = Instant::now();

    if let Some(absent) = spec.columns().find(|name| !dataset.has_column(name)) {
        return Err(EdaError::unknown_column(absent));
    }

    let numerical = spec
        .numerical()
        .iter()
        .map(|column| summary_statistics(dataset, column))
        .collect::<Result<Vec<_>>>()?;
    let categorical = spec
        .categorical()
        .iter()
        .map(|column| value_counts(dataset, column))
        .collect::<Result<Vec<_>>>()?;
    let class_balance = class_balance(dataset, spec.target())?;
    let features: Vec<&str> = spec.features().collect();
    let redundant_pairs = redundant_pairs(dataset, &features)?;

    let report = ProfileReport {
        row_count: dataset.row_count(),
        column_count: dataset.column_count(),
        spec: spec.clone(),
        numerical,
        categorical,
        class_balance,
        duplicate_rows: duplicate_row_count(dataset),
        missing: missing_counts(dataset),
        redundant_pairs,
    };

    info!(
        duplicate_rows = report.duplicate_rows,
        redundant_pairs = report.redundant_pairs.len(),
        classes = report.class_balance.len(),
        duration_ms = start.elapsed().as_millis(),
        "profile complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eda_model::Value;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["age".into(), "sex".into(), "class".into()],
            vec![
                vec![Value::from(39i64), Value::from("Male"), Value::from("<=50K")],
                vec![Value::from(50i64), Value::from("Female"), Value::from(">50K")],
                vec![Value::from(39i64), Value::from("Male"), Value::from("<=50K")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn missing_spec_column_fails() {
        let spec = ColumnSpec::new(["age"], ["race"], "class").unwrap();
        assert_eq!(
            profile(&sample(), &spec).unwrap_err(),
            EdaError::unknown_column("race")
        );
    }

    #[test]
    fn text_in_numerical_column_fails() {
        let spec = ColumnSpec::new(["sex"], Vec::<&str>::new(), "class").unwrap();
        assert_eq!(
            profile(&sample(), &spec).unwrap_err(),
            EdaError::non_numeric("sex")
        );
    }

    #[test]
    fn composes_queries() {
        let spec = ColumnSpec::new(["age"], ["sex"], "class").unwrap();
        let report = profile(&sample(), &spec).unwrap();
        assert_eq!(report.row_count, 3);
        assert_eq!(report.column_count, 3);
        assert_eq!(report.duplicate_rows, 1);
        assert_eq!(report.statistics("age").unwrap().count, 3);
        assert_eq!(report.value_counts("sex").unwrap().total(), 3);
        assert_eq!(report.class_balance.entries()[0].count, 2);
        // age 39 <-> Male, 50 <-> Female
        assert_eq!(report.redundant_pairs.len(), 1);
        assert_eq!(report.missing_total(), 0);
    }
}
