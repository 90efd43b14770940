//! Descriptive statistics of a numerical column.

use serde::{Deserialize, Serialize};

/// First quartile, median and third quartile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range (Q3 - Q1).
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Summary of the non-missing values of a numerical column.
///
/// Every statistic is `None` when the column has no values; `std` (sample
/// standard deviation) also needs at least two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub column: String,
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub quartiles: Option<Quartiles>,
}

impl SummaryStatistics {
    pub fn empty(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            count: 0,
            min: None,
            max: None,
            mean: None,
            std: None,
            quartiles: None,
        }
    }

    pub fn range(&self) -> Option<f64> {
        Some(self.max? - self.min?)
    }
}
