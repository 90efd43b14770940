//! Column role declarations.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::census;
use crate::error::{EdaError, Result};

/// Role a column plays in the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Numerical,
    Categorical,
    Target,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Numerical => "numerical",
            Self::Categorical => "categorical",
            Self::Target => "target",
        };
        f.write_str(label)
    }
}

/// Partition of column names into numerical, categorical and a single target.
///
/// The three groups are disjoint and contain no duplicates. Whether the names
/// exist in a given dataset is checked when the spec is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawColumnSpec")]
pub struct ColumnSpec {
    numerical: Vec<String>,
    categorical: Vec<String>,
    target: String,
}

#[derive(Deserialize)]
struct RawColumnSpec {
    #[serde(default)]
    numerical: Vec<String>,
    #[serde(default)]
    categorical: Vec<String>,
    target: String,
}

impl TryFrom<RawColumnSpec> for ColumnSpec {
    type Error = EdaError;

    fn try_from(raw: RawColumnSpec) -> Result<Self> {
        Self::new(raw.numerical, raw.categorical, raw.target)
    }
}

impl ColumnSpec {
    pub fn new<N, C, S>(numerical: N, categorical: C, target: impl Into<String>) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = Self {
            numerical: numerical.into_iter().map(Into::into).collect(),
            categorical: categorical.into_iter().map(Into::into).collect(),
            target: target.into(),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// The fixed schema of the adult census dataset.
    pub fn adult_census() -> Self {
        Self {
            numerical: to_owned(census::NUMERICAL_COLUMNS),
            categorical: to_owned(census::CATEGORICAL_COLUMNS),
            target: census::TARGET_COLUMN.to_string(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.target.is_empty() {
            return Err(EdaError::InvalidColumnSpec {
                reason: "target column name is empty".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for name in self.columns() {
            if !seen.insert(name) {
                return Err(EdaError::InvalidColumnSpec {
                    reason: format!("column '{name}' is declared more than once"),
                });
            }
        }
        Ok(())
    }

    pub fn numerical(&self) -> &[String] {
        &self.numerical
    }

    pub fn categorical(&self) -> &[String] {
        &self.categorical
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Every declared column: numerical, then categorical, then the target.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.features().chain(std::iter::once(self.target.as_str()))
    }

    /// Declared non-target columns, numerical first.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.numerical
            .iter()
            .chain(&self.categorical)
            .map(String::as_str)
    }

    pub fn role_of(&self, name: &str) -> Option<ColumnRole> {
        if self.target == name {
            Some(ColumnRole::Target)
        } else if self.numerical.iter().any(|c| c == name) {
            Some(ColumnRole::Numerical)
        } else if self.categorical.iter().any(|c| c == name) {
            Some(ColumnRole::Categorical)
        } else {
            None
        }
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}
