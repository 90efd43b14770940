//! Schema of the adult census income dataset.

/// Remote copy of the adult census CSV (header row included).
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/INRIA/scikit-learn-mooc/main/datasets/adult-census.csv";

pub const NUMERICAL_COLUMNS: &[&str] = &[
    "age",
    "education-num",
    "capital-gain",
    "capital-loss",
    "hours-per-week",
];

pub const CATEGORICAL_COLUMNS: &[&str] = &[
    "workclass",
    "education",
    "marital-status",
    "occupation",
    "relationship",
    "race",
    "sex",
    "native-country",
];

pub const TARGET_COLUMN: &str = "class";

/// Target label for incomes of at most 50K.
pub const LOW_INCOME: &str = "<=50K";

/// Target label for incomes above 50K.
pub const HIGH_INCOME: &str = ">50K";
