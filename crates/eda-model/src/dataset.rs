//! In-memory rectangular dataset.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{EdaError, Result};
use crate::value::Value;

/// Location label used for datasets built in memory rather than loaded.
pub const IN_MEMORY: &str = "<memory>";

/// An ordered sequence of rows sharing one ordered set of column names.
///
/// Every row holds exactly one [`Value`] per column. A dataset is never
/// modified after construction; projection produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

#[derive(Deserialize)]
struct RawDataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = EdaError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Self::new(raw.columns, raw.rows)
    }
}

impl Dataset {
    /// Builds a dataset, checking that column names are unique and non-empty
    /// and that every row has one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if name.is_empty() {
                return Err(malformed(None, "empty column name".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(malformed(None, format!("duplicate column '{name}'")));
            }
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(malformed(
                    Some(idx as u64 + 1),
                    format!("expected {} values, found {}", columns.len(), row.len()),
                ));
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Position of `name` among the columns.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| EdaError::unknown_column(name))
    }

    /// Iterates the values of one column in row order.
    pub fn column<'a>(
        &'a self,
        name: &str,
    ) -> Result<impl ExactSizeIterator<Item = &'a Value> + use<'a>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// True when every non-missing value of the column is a number.
    pub fn is_numeric(&self, name: &str) -> Result<bool> {
        Ok(self
            .column(name)?
            .all(|value| matches!(value, Value::Number(_) | Value::Missing)))
    }
}

fn malformed(line: Option<u64>, message: String) -> EdaError {
    EdaError::MalformedInput {
        location: IN_MEMORY.to_string(),
        line,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = Dataset::new(
            names(&["a", "b", "c"]),
            vec![vec![Value::from(1i64), Value::from("x")]],
        );
        assert!(matches!(
            result,
            Err(EdaError::MalformedInput { line: Some(1), .. })
        ));
    }

    #[test]
    fn rejects_duplicate_columns() {
        let result = Dataset::new(names(&["a", "a"]), Vec::new());
        assert!(matches!(result, Err(EdaError::MalformedInput { .. })));
    }

    #[test]
    fn column_access() {
        let ds = Dataset::new(
            names(&["age", "sex"]),
            vec![
                vec![Value::from(39i64), Value::from("Male")],
                vec![Value::Missing, Value::from("Female")],
            ],
        )
        .unwrap();

        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column_count(), 2);
        assert_eq!(ds.column_index("sex").unwrap(), 1);
        assert!(ds.is_numeric("age").unwrap());
        assert!(!ds.is_numeric("sex").unwrap());
        let sexes: Vec<String> = ds.column("sex").unwrap().map(ToString::to_string).collect();
        assert_eq!(sexes, vec!["Male", "Female"]);
        assert!(matches!(
            ds.column("race").err(),
            Some(EdaError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn deserialization_validates_shape() {
        let json = r#"{"columns":["a","b"],"rows":[[1.0]]}"#;
        assert!(serde_json::from_str::<Dataset>(json).is_err());
        let json = r#"{"columns":["a","b"],"rows":[[1.0,"x"]]}"#;
        let ds: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(ds.row_count(), 1);
    }
}
