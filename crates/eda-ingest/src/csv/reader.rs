//! CSV parsing into a typed [`Dataset`].

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::time::{Duration, Instant};

use tracing::{debug, info, info_span};

use eda_model::{ColumnSpec, Dataset, EdaError, Result, Value};

use super::header::{header_problem, normalize_header};
use crate::source::{Source, fetch_url};

/// Default timeout for fetching remote sources.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// How to read and type a CSV source.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Columns that must hold numbers; an unparseable field is an error.
    pub numerical: Vec<String>,
    /// Columns kept as text even when every field looks numeric.
    pub text: Vec<String>,
    /// Field values treated as missing in addition to the empty string.
    pub missing_values: Vec<String>,
    /// Request timeout for URL sources.
    pub timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            numerical: Vec::new(),
            text: Vec::new(),
            missing_values: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LoadOptions {
    /// Options declaring the spec's numerical columns as numbers and its
    /// categorical and target columns as text.
    pub fn for_spec(spec: &ColumnSpec) -> Self {
        Self {
            numerical: spec.numerical().to_vec(),
            text: spec
                .categorical()
                .iter()
                .cloned()
                .chain(std::iter::once(spec.target().to_string()))
                .collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_missing_values<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_values = markers.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn is_missing(&self, field: &str) -> bool {
        field.is_empty() || self.missing_values.iter().any(|marker| marker == field)
    }
}

/// Loads a dataset from a local path or URL.
///
/// # Errors
///
/// - [`EdaError::SourceUnavailable`] if the location cannot be read
/// - [`EdaError::MalformedInput`] for ragged rows, a bad header, or an
///   unparseable field in a declared numerical column
/// - [`EdaError::UnknownColumn`] if a declared numerical column is absent
pub fn load(source: &Source, options: &LoadOptions) -> Result<Dataset> {
    let span = info_span!("load", source = %source);
    let _guard = span.enter();
    let start = Instant::now();
    let location = source.to_string();

    let dataset = match source {
        Source::Path(path) => {
            let file = File::open(path).map_err(|e| EdaError::SourceUnavailable {
                location: location.clone(),
                message: e.to_string(),
            })?;
            load_reader(file, &location, options)?
        }
        Source::Url(url) => {
            let body = fetch_url(url, options.timeout)?;
            load_reader(body, &location, options)?
        }
    };

    info!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(dataset)
}

/// Parses CSV text held in memory.
pub fn load_str(contents: &str, options: &LoadOptions) -> Result<Dataset> {
    load_reader(contents.as_bytes(), eda_model::dataset::IN_MEMORY, options)
}

/// Parses CSV from any reader. `location` labels errors.
pub fn load_reader<R: Read>(input: R, location: &str, options: &LoadOptions) -> Result<Dataset> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(::csv::Trim::All)
        .from_reader(input);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(location, &e))?
        .iter()
        .map(normalize_header)
        .collect();
    if let Some(problem) = header_problem(&columns) {
        return Err(malformed(location, Some(1), problem));
    }

    for name in &options.numerical {
        if !columns.contains(name) {
            return Err(EdaError::unknown_column(name.clone()));
        }
    }

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    let mut lines: Vec<u64> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(location, &e))?;
        lines.push(record.position().map_or(0, ::csv::Position::line));
        raw_rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(
        location,
        rows = raw_rows.len(),
        columns = columns.len(),
        "parsed csv records"
    );

    let numerical: HashSet<&str> = options.numerical.iter().map(String::as_str).collect();
    let text: HashSet<&str> = options.text.iter().map(String::as_str).collect();

    let mut typed: Vec<Vec<Value>> = (0..raw_rows.len())
        .map(|_| Vec::with_capacity(columns.len()))
        .collect();
    for (col_idx, name) in columns.iter().enumerate() {
        let kind = if numerical.contains(name.as_str()) {
            ColumnKind::Numeric
        } else if text.contains(name.as_str()) {
            ColumnKind::Text
        } else if infer_numeric(&raw_rows, col_idx, options) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        };
        debug!(column = %name, kind = ?kind, "typed column");

        for (row_idx, row) in raw_rows.iter().enumerate() {
            let field = row[col_idx].as_str();
            let value = if options.is_missing(field) {
                Value::Missing
            } else {
                match kind {
                    ColumnKind::Numeric => parse_number(field).ok_or_else(|| {
                        malformed(
                            location,
                            Some(lines[row_idx]),
                            format!("column '{name}': '{field}' is not a number"),
                        )
                    })?,
                    ColumnKind::Text => Value::Text(field.to_string()),
                }
            };
            typed[row_idx].push(value);
        }
    }

    Dataset::new(columns, typed).map_err(|e| match e {
        EdaError::MalformedInput { line, message, .. } => malformed(location, line, message),
        other => other,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Numeric,
    Text,
}

fn parse_number(field: &str) -> Option<Value> {
    field.parse::<f64>().ok().and_then(Value::number)
}

/// A column is numeric when it has at least one value and every
/// non-missing field parses as a finite number.
fn infer_numeric(rows: &[Vec<String>], col_idx: usize, options: &LoadOptions) -> bool {
    let mut seen_value = false;
    for row in rows {
        let field = row[col_idx].as_str();
        if options.is_missing(field) {
            continue;
        }
        if parse_number(field).is_none() {
            return false;
        }
        seen_value = true;
    }
    seen_value
}

fn malformed(location: &str, line: Option<u64>, message: String) -> EdaError {
    EdaError::MalformedInput {
        location: location.to_string(),
        line,
        message,
    }
}

fn csv_error(location: &str, err: &::csv::Error) -> EdaError {
    match err.kind() {
        ::csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => malformed(
            location,
            pos.as_ref().map(::csv::Position::line),
            format!("expected {expected_len} fields, found {len}"),
        ),
        ::csv::ErrorKind::Io(io) => EdaError::SourceUnavailable {
            location: location.to_string(),
            message: io.to_string(),
        },
        _ => malformed(
            location,
            err.position().map(::csv::Position::line),
            err.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infers_column_types() {
        let ds = load_str(
            "age,sex,code\n39,Male,001\n50,Female,\n",
            &LoadOptions::default(),
        )
        .unwrap();
        assert!(ds.is_numeric("age").unwrap());
        assert!(!ds.is_numeric("sex").unwrap());
        assert!(ds.is_numeric("code").unwrap());
        assert_eq!(ds.rows()[1][2], Value::Missing);
    }

    #[test]
    fn test_declared_text_stays_text() {
        let options = LoadOptions {
            text: vec!["code".to_string()],
            ..LoadOptions::default()
        };
        let ds = load_str("code\n001\n002\n", &options).unwrap();
        assert_eq!(ds.rows()[0][0], Value::from("001"));
    }

    #[test]
    fn test_declared_numeric_must_parse() {
        let options = LoadOptions {
            numerical: vec!["age".to_string()],
            ..LoadOptions::default()
        };
        let err = load_str("age,sex\n39,Male\nforty,Female\n", &options).unwrap_err();
        assert!(matches!(
            err,
            EdaError::MalformedInput { line: Some(3), .. }
        ));
    }

    #[test]
    fn test_declared_numeric_must_exist() {
        let options = LoadOptions {
            numerical: vec!["hours-per-week".to_string()],
            ..LoadOptions::default()
        };
        let err = load_str("age\n39\n", &options).unwrap_err();
        assert_eq!(err, EdaError::unknown_column("hours-per-week"));
    }

    #[test]
    fn test_missing_markers() {
        let options = LoadOptions::default().with_missing_values(["?"]);
        let ds = load_str("workclass,age\n?,39\nPrivate,?\n", &options).unwrap();
        assert_eq!(ds.rows()[0][0], Value::Missing);
        assert_eq!(ds.rows()[1][1], Value::Missing);
        assert!(ds.is_numeric("age").unwrap());
    }

    #[test]
    fn test_short_row_is_malformed() {
        let err = load_str("a,b,c\n1,2\n", &LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            EdaError::MalformedInput { line: Some(2), .. }
        ));
    }

    #[test]
    fn test_long_row_is_malformed() {
        let err = load_str("a,b\n1,2,3\n", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, EdaError::MalformedInput { .. }));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = load_str("", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, EdaError::MalformedInput { .. }));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let ds = load_str(
            "age, workclass, class\n39, State-gov, <=50K\n",
            &LoadOptions::default(),
        )
        .unwrap();
        assert_eq!(ds.columns(), ["age", "workclass", "class"]);
        assert_eq!(ds.rows()[0][1], Value::from("State-gov"));
        assert_eq!(ds.rows()[0][2], Value::from("<=50K"));
    }

    #[test]
    fn test_non_finite_is_not_numeric() {
        let ds = load_str("x\nNaN\n1\n", &LoadOptions::default()).unwrap();
        assert!(!ds.is_numeric("x").unwrap());
    }
}
