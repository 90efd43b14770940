//! The aggregate profile of a dataset.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::counts::ValueCount;
use crate::spec::ColumnSpec;
use crate::stats::SummaryStatistics;

/// Two columns in one-to-one value correspondence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedundantPair {
    pub column_a: String,
    pub column_b: String,
    /// Number of distinct values shared by the pair.
    pub levels: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCount {
    pub column: String,
    pub count: usize,
}

/// Read-only snapshot of one profiling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub row_count: usize,
    pub column_count: usize,
    pub spec: ColumnSpec,
    /// Statistics per numerical column, in declaration order.
    pub numerical: Vec<SummaryStatistics>,
    /// Value counts per categorical column, in declaration order.
    pub categorical: Vec<ValueCount>,
    pub class_balance: ValueCount,
    pub duplicate_rows: usize,
    /// Missing values per dataset column, in dataset order.
    pub missing: Vec<MissingCount>,
    pub redundant_pairs: Vec<RedundantPair>,
}

impl ProfileReport {
    pub fn statistics(&self, column: &str) -> Option<&SummaryStatistics> {
        self.numerical.iter().find(|stats| stats.column == column)
    }

    pub fn value_counts(&self, column: &str) -> Option<&ValueCount> {
        self.categorical
            .iter()
            .find(|counts| counts.column() == column)
    }

    pub fn missing_total(&self) -> usize {
        self.missing.iter().map(|m| m.count).sum()
    }

    /// SHA-256 of the report's JSON form, hex encoded.
    ///
    /// Two reports have the same fingerprint exactly when they serialize to
    /// the same bytes.
    pub fn fingerprint(&self) -> serde_json::Result<String> {
        let bytes = serde_json::to_vec(self)?;
        let digest = Sha256::digest(&bytes);
        Ok(hex::encode(digest))
    }
}
