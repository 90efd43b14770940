//! Header row validation.

use std::collections::HashSet;

/// Normalizes a header value: trims whitespace and a stray UTF-8 BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Returns a description of the first problem with `columns`, if any.
pub fn header_problem(columns: &[String]) -> Option<String> {
    if columns.is_empty() {
        return Some("missing header row".to_string());
    }
    let mut seen = HashSet::with_capacity(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        if name.is_empty() {
            return Some(format!("header field {} is empty", idx + 1));
        }
        if !seen.insert(name.as_str()) {
            return Some(format!("duplicate column '{name}'"));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  age  "), "age");
        assert_eq!(normalize_header("\u{feff}age"), "age");
        assert_eq!(normalize_header("education-num"), "education-num");
    }

    #[test]
    fn test_header_problem() {
        assert_eq!(header_problem(&cols(&["age", "sex"])), None);
        assert_eq!(
            header_problem(&cols(&["age", "age"])),
            Some("duplicate column 'age'".to_string())
        );
        assert_eq!(
            header_problem(&cols(&["age", ""])),
            Some("header field 2 is empty".to_string())
        );
        assert!(header_problem(&[]).is_some());
    }
}
