//! # Tabular Frame Model
//!
//! Minimal row/column dataset passed between the loaders, the metric
//! calculators and the benchmark engine. A `Frame` is an ordered set of
//! column names plus a list of `Record`s; each record maps column names to
//! scalar `Field`s.
//!
//! Two numeric access paths with different strictness:
//! - [`Record::number`] - strict: text where a number is expected is an
//!   `InvalidInput` error (the resolution boundary, never silently coerced)
//! - [`Record::coerced_number`] - tolerant: text is parsed if possible,
//!   otherwise treated as missing (the ingestion path)

use crate::error::{CoreError, Result};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A single scalar cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Field {
    Number(f64),
    Text(String),
    Missing,
}

impl Field {
    /// Parse a raw CSV cell: blank -> Missing, numeric -> Number, else Text.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na") {
            return Field::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) => Field::Number(n),
            Err(_) => Field::Text(trimmed.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }
}

/// One row of named scalar fields.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: FxHashMap<String, Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&Field> {
        self.fields.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Strict numeric access. Absent cells, `Missing` and NaN all read as
    /// `Ok(None)`; text in a numeric column is an `InvalidInput` error.
    pub fn number(&self, column: &str) -> Result<Option<f64>> {
        match self.fields.get(column) {
            None | Some(Field::Missing) => Ok(None),
            Some(Field::Number(n)) if n.is_nan() => Ok(None),
            Some(Field::Number(n)) => Ok(Some(*n)),
            Some(Field::Text(s)) => Err(CoreError::InvalidInput {
                column: column.to_string(),
                found: s.clone(),
            }),
        }
    }

    /// Tolerant numeric access: text that parses as a number is accepted,
    /// anything else reads as missing.
    pub fn coerced_number(&self, column: &str) -> Option<f64> {
        match self.fields.get(column) {
            Some(Field::Number(n)) if !n.is_nan() => Some(*n),
            Some(Field::Text(s)) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
            _ => None,
        }
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        match self.fields.get(column) {
            Some(Field::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn set_number(&mut self, column: &str, value: f64) {
        self.fields.insert(column.to_string(), Field::Number(value));
    }

    pub fn set_text(&mut self, column: &str, value: &str) {
        self.fields
            .insert(column.to_string(), Field::Text(value.to_string()));
    }

    pub fn set_missing(&mut self, column: &str) {
        self.fields.insert(column.to_string(), Field::Missing);
    }

    pub fn set(&mut self, column: &str, field: Field) {
        self.fields.insert(column.to_string(), field);
    }

    /// Set a number if present, otherwise an explicit missing cell.
    pub fn set_opt_number(&mut self, column: &str, value: Option<f64>) {
        match value {
            Some(v) if !v.is_nan() => self.set_number(column, v),
            _ => self.set_missing(column),
        }
    }
}

/// Ordered-column dataset.
///
/// Column order is the CSV header order plus any derived columns in the
/// order they were registered. Records may omit columns; readers treat
/// absent cells as missing.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, record: Record) {
        self.rows.push(record);
    }

    /// Register a column name, keeping the order stable. No-op if present.
    pub fn ensure_column(&mut self, column: &str) {
        if !self.columns.iter().any(|c| c == column) {
            self.columns.push(column.to_string());
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Record] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Collect a column's values through the tolerant parse, dropping
    /// missing cells. This is the population feed for benchmark building.
    pub fn numeric_column(&self, column: &str) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|r| r.coerced_number(column))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_raw() {
        assert_eq!(Field::from_raw("0.52"), Field::Number(0.52));
        assert_eq!(Field::from_raw("  "), Field::Missing);
        assert_eq!(Field::from_raw("NA"), Field::Missing);
        assert_eq!(Field::from_raw("Guard"), Field::Text("Guard".to_string()));
    }

    #[test]
    fn test_strict_number_rejects_text() {
        let mut rec = Record::new();
        rec.set_text("efg_pct", "abc");
        let err = rec.number("efg_pct").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { .. }));
    }

    #[test]
    fn test_strict_number_soft_on_missing() {
        let mut rec = Record::new();
        rec.set_missing("efg_pct");
        assert_eq!(rec.number("efg_pct").unwrap(), None);
        assert_eq!(rec.number("not_a_column").unwrap(), None);
        rec.set_number("nan_col", f64::NAN);
        assert_eq!(rec.number("nan_col").unwrap(), None);
    }

    #[test]
    fn test_coerced_number_parses_text() {
        let mut rec = Record::new();
        rec.set_text("minutes", "31.5");
        assert_eq!(rec.coerced_number("minutes"), Some(31.5));
        rec.set_text("minutes", "DNP");
        assert_eq!(rec.coerced_number("minutes"), None);
    }

    #[test]
    fn test_frame_column_registry() {
        let mut frame = Frame::with_columns(vec!["a".to_string()]);
        frame.ensure_column("b");
        frame.ensure_column("a");
        assert_eq!(frame.columns(), &["a".to_string(), "b".to_string()]);
        assert!(frame.has_column("b"));
        assert!(!frame.has_column("c"));
    }

    #[test]
    fn test_numeric_column_drops_missing() {
        let mut frame = Frame::with_columns(vec!["x".to_string()]);
        for v in [Some(1.0), None, Some(3.0)] {
            let mut rec = Record::new();
            rec.set_opt_number("x", v);
            frame.push_row(rec);
        }
        assert_eq!(frame.numeric_column("x"), vec![1.0, 3.0]);
    }
}
