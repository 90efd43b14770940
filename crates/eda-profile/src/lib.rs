//! Descriptive queries over an immutable [`Dataset`](eda_model::Dataset).
//!
//! Every function here is pure: it borrows the dataset, never mutates it, and
//! returns the same result for the same input. [`profile`] composes them into
//! one [`ProfileReport`](eda_model::ProfileReport).
//!
//! # Example
//!
//! ```
//! use eda_ingest::{LoadOptions, load_str};
//! use eda_model::{ColumnSpec, Value};
//! use eda_profile::{class_balance, profile};
//!
//! let csv = "age,sex,class\n39,Male,<=50K\n50,Male,<=50K\n38,Female,>50K\n";
//! let spec = ColumnSpec::new(["age"], ["sex"], "class").unwrap();
//! let dataset = load_str(csv, &LoadOptions::for_spec(&spec)).unwrap();
//!
//! let balance = class_balance(&dataset, "class").unwrap();
//! assert_eq!(balance.get(&Value::from("<=50K")), Some(2));
//!
//! let report = profile(&dataset, &spec).unwrap();
//! assert_eq!(report.row_count, 3);
//! ```

mod counts;
mod profile;
mod project;
mod rows;
mod stats;

pub use counts::{class_balance, cross_tab, redundant_pairs, value_counts};
pub use profile::profile;
pub use project::project;
pub use rows::{duplicate_row_count, missing_counts};
pub use stats::{quantile, summary_statistics};
