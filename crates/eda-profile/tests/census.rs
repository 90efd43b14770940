//! Profiling the bundled adult census sample.

use std::path::PathBuf;

use eda_ingest::{LoadOptions, Source, load};
use eda_model::{ColumnSpec, Dataset, EdaError, RedundantPair, Value, census};
use eda_profile::{
    class_balance, cross_tab, duplicate_row_count, profile, project, summary_statistics,
    value_counts,
};

fn census_sample() -> Dataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/adult-census-sample.csv");
    let options = LoadOptions::for_spec(&ColumnSpec::adult_census()).with_missing_values(["?"]);
    load(&Source::Path(path), &options).expect("load census sample")
}

#[test]
fn profile_of_census_sample() {
    let dataset = census_sample();
    let report = profile(&dataset, &ColumnSpec::adult_census()).expect("profile");

    assert_eq!(report.row_count, 20);
    assert_eq!(report.column_count, 14);
    assert_eq!(report.duplicate_rows, 1);
    assert_eq!(report.numerical.len(), census::NUMERICAL_COLUMNS.len());
    assert_eq!(report.categorical.len(), census::CATEGORICAL_COLUMNS.len());

    assert_eq!(
        report.redundant_pairs,
        vec![RedundantPair {
            column_a: "education-num".to_string(),
            column_b: "education".to_string(),
            levels: 9,
        }]
    );

    let balance = &report.class_balance;
    assert_eq!(balance.get(&Value::from(census::LOW_INCOME)), Some(14));
    assert_eq!(balance.get(&Value::from(census::HIGH_INCOME)), Some(6));
    assert_eq!(balance.most_common().map(|e| e.value.clone()), Some(Value::from("<=50K")));

    let missing: Vec<(&str, usize)> = report
        .missing
        .iter()
        .filter(|m| m.count > 0)
        .map(|m| (m.column.as_str(), m.count))
        .collect();
    assert_eq!(missing, vec![("workclass", 3), ("occupation", 3)]);
}

#[test]
fn age_statistics() {
    let stats = summary_statistics(&census_sample(), "age").unwrap();
    assert_eq!(stats.count, 20);
    assert_eq!(stats.min, Some(18.0));
    assert_eq!(stats.max, Some(65.0));
    assert_eq!(stats.mean, Some(38.0));
    assert!((stats.std.unwrap() - 14.157_014_255_540_57).abs() < 1e-9);
    let quartiles = stats.quartiles.unwrap();
    assert_eq!(quartiles.q1, 26.0);
    assert_eq!(quartiles.median, 36.5);
    assert_eq!(quartiles.q3, 45.0);
}

#[test]
fn hours_per_week_statistics() {
    let stats = summary_statistics(&census_sample(), "hours-per-week").unwrap();
    assert_eq!(stats.min, Some(10.0));
    assert_eq!(stats.max, Some(50.0));
    let quartiles = stats.quartiles.unwrap();
    assert_eq!(quartiles.q1, 30.0);
    assert_eq!(quartiles.median, 39.5);
    assert_eq!(quartiles.q3, 40.0);
}

#[test]
fn workclass_counts_exclude_missing_marker() {
    let counts = value_counts(&census_sample(), "workclass").unwrap();
    let entries: Vec<(String, usize)> = counts
        .entries()
        .iter()
        .map(|e| (e.value.to_string(), e.count))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("Private".to_string(), 13),
            ("Local-gov".to_string(), 1),
            ("Self-emp-not-inc".to_string(), 1),
            ("Federal-gov".to_string(), 1),
            ("State-gov".to_string(), 1),
        ]
    );
    assert_eq!(counts.total(), 17);
}

#[test]
fn sex_against_class() {
    let table = cross_tab(&census_sample(), "sex", "class").unwrap();
    assert_eq!(table.get(&Value::from("Male"), &Value::from(">50K")), 6);
    assert_eq!(table.get(&Value::from("Female"), &Value::from(">50K")), 0);
    assert_eq!(table.get(&Value::from("Female"), &Value::from("<=50K")), 6);
    assert_eq!(table.total(), 20);
    assert!(!table.is_redundant());
}

#[test]
fn dropping_redundant_column_keeps_information() {
    let dataset = census_sample();
    let kept: Vec<&str> = dataset
        .columns()
        .iter()
        .map(String::as_str)
        .filter(|c| *c != "education-num")
        .collect();
    let projected = project(&dataset, &kept).unwrap();
    assert_eq!(projected.column_count(), 13);
    assert_eq!(duplicate_row_count(&projected), duplicate_row_count(&dataset));
    assert_eq!(
        class_balance(&projected, "class").unwrap(),
        class_balance(&dataset, "class").unwrap()
    );

    let spec = ColumnSpec::adult_census();
    assert_eq!(
        profile(&projected, &spec).unwrap_err(),
        EdaError::unknown_column("education-num")
    );
}
