//! Algebraic properties of the profiling queries.

use std::collections::HashSet;

use eda_model::{ColumnSpec, Dataset, Value};
use eda_profile::{
    class_balance, cross_tab, duplicate_row_count, profile, project, value_counts,
};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Missing),
        (0i64..4).prop_map(Value::from),
        prop::sample::select(vec!["a", "b", "c"]).prop_map(Value::from),
    ]
}

fn label() -> impl Strategy<Value = Value> {
    prop::sample::select(vec!["<=50K", ">50K"]).prop_map(Value::from)
}

/// Datasets with two mixed feature columns, one integer column and a target.
fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec((cell(), cell(), 0i64..5, label()), 0..40).prop_map(|rows| {
        Dataset::new(
            vec!["x".into(), "y".into(), "n".into(), "class".into()],
            rows.into_iter()
                .map(|(x, y, n, class)| vec![x, y, Value::from(n), class])
                .collect(),
        )
        .expect("well-formed dataset")
    })
}

proptest! {
    #[test]
    fn duplicates_are_rows_minus_distinct(ds in dataset()) {
        let distinct: HashSet<&Vec<Value>> = ds.rows().iter().collect();
        prop_assert_eq!(duplicate_row_count(&ds), ds.row_count() - distinct.len());
    }

    #[test]
    fn value_counts_partition_non_missing(ds in dataset()) {
        for column in ["x", "y", "class"] {
            let counts = value_counts(&ds, column).unwrap();
            let present = ds.column(column).unwrap().filter(|v| !v.is_missing()).count();
            prop_assert_eq!(counts.total(), present);
        }
    }

    #[test]
    fn redundancy_is_symmetric(ds in dataset()) {
        for (a, b) in [("x", "y"), ("x", "n"), ("y", "class"), ("n", "class")] {
            let forward = cross_tab(&ds, a, b).unwrap();
            let backward = cross_tab(&ds, b, a).unwrap();
            prop_assert_eq!(forward.is_redundant(), backward.is_redundant());
            prop_assert_eq!(forward.total(), backward.total());
        }
    }

    #[test]
    fn project_is_idempotent(ds in dataset()) {
        let once = project(&ds, &["class", "x"]).unwrap();
        let twice = project(&once, &["class", "x"]).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn profile_is_deterministic(ds in dataset()) {
        let spec = ColumnSpec::new(["n"], ["x", "y"], "class").unwrap();
        let first = profile(&ds, &spec);
        let second = profile(&ds, &spec);
        prop_assert_eq!(&first, &second);
        if let (Ok(a), Ok(b)) = (first, second) {
            prop_assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
        }
    }
}

#[test]
fn class_balance_snapshot() {
    let ds = Dataset::new(
        vec!["class".to_string()],
        ["<=50K", "<=50K", "<=50K", ">50K"]
            .iter()
            .map(|label| vec![Value::from(*label)])
            .collect(),
    )
    .unwrap();
    let balance = class_balance(&ds, "class").unwrap();
    insta::assert_json_snapshot!(balance, @r#"
    {
      "column": "class",
      "entries": [
        {
          "value": "<=50K",
          "count": 3
        },
        {
          "value": ">50K",
          "count": 1
        }
      ]
    }
    "#);
}
