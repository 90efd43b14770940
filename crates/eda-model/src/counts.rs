//! Frequency tables.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One observed value and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub value: Value,
    pub count: usize,
}

/// Occurrence counts of the distinct non-missing values of one column,
/// ordered by descending count. Equal counts keep first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    column: String,
    entries: Vec<CountEntry>,
}

impl ValueCount {
    /// Builds the table from a tally in first-seen order.
    pub fn from_tally(column: impl Into<String>, tally: Vec<(Value, usize)>) -> Self {
        let mut entries: Vec<CountEntry> = tally
            .into_iter()
            .map(|(value, count)| CountEntry { value, count })
            .collect();
        // stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self {
            column: column.into(),
            entries,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn entries(&self) -> &[CountEntry] {
        &self.entries
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of non-missing values counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn get(&self, value: &Value) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| &entry.value == value)
            .map(|entry| entry.count)
    }

    /// Share of `value` among the counted values.
    pub fn proportion(&self, value: &Value) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        self.get(value).map(|count| count as f64 / total as f64)
    }

    pub fn most_common(&self) -> Option<&CountEntry> {
        self.entries.first()
    }

    pub fn least_common(&self) -> Option<&CountEntry> {
        self.entries.last()
    }

    /// Ratio of the largest to the smallest count; 1.0 means balanced.
    pub fn imbalance_ratio(&self) -> Option<f64> {
        let most = self.most_common()?;
        let least = self.least_common()?;
        Some(most.count as f64 / least.count as f64)
    }
}

/// Joint occurrence counts of two columns.
///
/// Row labels are the distinct values of `column_a`, column labels those of
/// `column_b`, both in order of first appearance. Rows where either value is
/// missing are not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTab {
    column_a: String,
    column_b: String,
    row_labels: Vec<Value>,
    column_labels: Vec<Value>,
    counts: Vec<Vec<usize>>,
}

impl CrossTab {
    /// Assembles a table. `counts` must be `row_labels.len()` rows of
    /// `column_labels.len()` cells.
    pub fn new(
        column_a: impl Into<String>,
        column_b: impl Into<String>,
        row_labels: Vec<Value>,
        column_labels: Vec<Value>,
        counts: Vec<Vec<usize>>,
    ) -> Self {
        debug_assert_eq!(counts.len(), row_labels.len());
        debug_assert!(counts.iter().all(|row| row.len() == column_labels.len()));
        Self {
            column_a: column_a.into(),
            column_b: column_b.into(),
            row_labels,
            column_labels,
            counts,
        }
    }

    pub fn column_a(&self) -> &str {
        &self.column_a
    }

    pub fn column_b(&self) -> &str {
        &self.column_b
    }

    pub fn row_labels(&self) -> &[Value] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[Value] {
        &self.column_labels
    }

    pub fn counts(&self) -> &[Vec<usize>] {
        &self.counts
    }

    /// Joint count of (`a`, `b`); zero when either label was never observed.
    pub fn get(&self, a: &Value, b: &Value) -> usize {
        let Some(row) = self.row_labels.iter().position(|label| label == a) else {
            return 0;
        };
        let Some(col) = self.column_labels.iter().position(|label| label == b) else {
            return 0;
        };
        self.counts[row][col]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// True when the two columns are in one-to-one correspondence: every row
    /// and every column of the table has exactly one non-zero cell.
    pub fn is_redundant(&self) -> bool {
        if self.row_labels.is_empty() || self.row_labels.len() != self.column_labels.len() {
            return false;
        }
        let rows_single = self
            .counts
            .iter()
            .all(|row| row.iter().filter(|&&count| count > 0).count() == 1);
        let columns_single = (0..self.column_labels.len()).all(|col| {
            self.counts
                .iter()
                .filter(|row| row[col] > 0)
                .count()
                == 1
        });
        rows_single && columns_single
    }

    /// The same table with the roles of the two columns swapped.
    pub fn transpose(&self) -> Self {
        let counts = (0..self.column_labels.len())
            .map(|col| self.counts.iter().map(|row| row[col]).collect())
            .collect();
        Self {
            column_a: self.column_b.clone(),
            column_b: self.column_a.clone(),
            row_labels: self.column_labels.clone(),
            column_labels: self.row_labels.clone(),
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(pairs: &[(&str, usize)]) -> Vec<(Value, usize)> {
        pairs.iter().map(|(v, c)| (Value::from(*v), *c)).collect()
    }

    #[test]
    fn value_count_orders_by_count_then_first_seen() {
        let counts = ValueCount::from_tally(
            "race",
            tally(&[("Black", 2), ("White", 5), ("Other", 2), ("Eskimo", 1)]),
        );
        let order: Vec<String> = counts
            .entries()
            .iter()
            .map(|e| e.value.to_string())
            .collect();
        assert_eq!(order, vec!["White", "Black", "Other", "Eskimo"]);
        assert_eq!(counts.total(), 10);
        assert_eq!(counts.get(&Value::from("Other")), Some(2));
        assert_eq!(counts.get(&Value::from("Asian")), None);
        assert_eq!(counts.proportion(&Value::from("White")), Some(0.5));
        assert_eq!(counts.imbalance_ratio(), Some(5.0));
    }

    #[test]
    fn empty_value_count() {
        let counts = ValueCount::from_tally("class", Vec::new());
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.proportion(&Value::from("<=50K")), None);
        assert_eq!(counts.imbalance_ratio(), None);
    }

    #[test]
    fn redundancy_requires_bijection() {
        let labels = |xs: &[&str]| xs.iter().map(|x| Value::from(*x)).collect::<Vec<_>>();
        let bijective = CrossTab::new(
            "a",
            "b",
            labels(&["x", "y"]),
            labels(&["1", "2"]),
            vec![vec![3, 0], vec![0, 1]],
        );
        assert!(bijective.is_redundant());
        assert!(bijective.transpose().is_redundant());

        // x maps to both 1 and 2
        let many_to_many = CrossTab::new(
            "a",
            "b",
            labels(&["x", "y"]),
            labels(&["1", "2"]),
            vec![vec![3, 1], vec![0, 1]],
        );
        assert!(!many_to_many.is_redundant());

        // function from a to b, but not injective
        let surjective = CrossTab::new(
            "a",
            "b",
            labels(&["x", "y"]),
            labels(&["1"]),
            vec![vec![3], vec![2]],
        );
        assert!(!surjective.is_redundant());
        assert!(!surjective.transpose().is_redundant());

        let empty = CrossTab::new("a", "b", Vec::new(), Vec::new(), Vec::new());
        assert!(!empty.is_redundant());
    }

    #[test]
    fn transpose_swaps_axes() {
        let tab = CrossTab::new(
            "sex",
            "class",
            vec![Value::from("Male"), Value::from("Female")],
            vec![Value::from("<=50K"), Value::from(">50K")],
            vec![vec![4, 2], vec![3, 0]],
        );
        let t = tab.transpose();
        assert_eq!(t.column_a(), "class");
        assert_eq!(t.get(&Value::from(">50K"), &Value::from("Male")), 2);
        assert_eq!(t.total(), tab.total());
        assert_eq!(t.transpose(), tab);
    }
}
