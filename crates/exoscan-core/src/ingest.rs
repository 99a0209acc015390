//! Row Set collection from the three input sources.
//!
//! A [`RowSet`] is the transient hand-off between input collection and
//! normalization: an ordered list of comma-joined rows whose first row is
//! the header row. Manual table reads, CSV files, and JSON files all funnel
//! through this one shape so the normalizer has a single contract.
//!
//! Parsing here is deliberately naive: rows split on commas positionally
//! with no quoting or escaping support. A value containing an embedded
//! comma will shift every column after it — a documented boundary condition
//! of the data domain, not something this module tries to repair.

use serde_json::Value;

use crate::error::IngestError;

/// How the user chose to provide candidate data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMethod {
    /// Rows are read from the editable table in the page.
    Manual,
    /// Rows are read from an uploaded file.
    File,
}

/// Declared format of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
}

impl FileFormat {
    /// File-picker extension filter for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Json => "json",
        }
    }
}

/// Explicit import-session state, owned by the analyze view and passed into
/// the collector instead of living in free-floating globals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSelection {
    pub method: Option<ImportMethod>,
    pub format: Option<FileFormat>,
}

/// An ordered sequence of comma-joined rows; the first row is headers.
///
/// Created per user action and discarded after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    rows: Vec<String>,
}

impl RowSet {
    /// Collects rows from the manual table: one header row built from the
    /// column labels, then one row per table body row.
    ///
    /// An empty body is a valid, degenerate input — the Row Set then holds
    /// only the header row and normalization yields no records.
    pub fn from_table<S: AsRef<str>>(headers: &[S], body: &[Vec<String>]) -> RowSet {
        let mut rows = Vec::with_capacity(body.len() + 1);
        rows.push(join_cells(headers.iter().map(|h| h.as_ref())));
        for table_row in body {
            rows.push(join_cells(table_row.iter().map(|c| c.as_str())));
        }
        RowSet { rows }
    }

    /// Collects rows from CSV text: split on newline, blank lines dropped.
    ///
    /// No quoting/escaping support; see the module docs.
    pub fn from_csv(text: &str) -> RowSet {
        let rows = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        RowSet { rows }
    }

    /// Collects rows from a JSON document whose top-level value is an array
    /// of row-like objects (or an object whose values are row-like objects).
    ///
    /// Each row object's values are joined with commas in field order, so
    /// the fields must follow the schema's positional order or values are
    /// silently mismapped. Like the CSV path, the first flattened row is
    /// consumed as the header row by normalization.
    pub fn from_json(text: &str) -> Result<RowSet, IngestError> {
        let doc: Value =
            serde_json::from_str(text).map_err(|e| IngestError::MalformedInput(e.to_string()))?;

        let row_values: Vec<&Value> = match &doc {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => map.values().collect(),
            _ => {
                return Err(IngestError::MalformedInput(
                    "expected a collection of row objects".to_string(),
                ))
            }
        };

        let rows = row_values
            .into_iter()
            .map(|row| {
                let cells: Vec<String> = match row {
                    Value::Object(fields) => fields.values().map(flatten_value).collect(),
                    Value::Array(items) => items.iter().map(flatten_value).collect(),
                    other => vec![flatten_value(other)],
                };
                cells.join(",")
            })
            .collect();

        Ok(RowSet { rows })
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Header cells, split positionally. Empty when the set has no rows.
    pub fn header_cells(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|h| h.split(',').collect())
            .unwrap_or_default()
    }

    /// Data rows (everything after the header row).
    pub fn data_rows(&self) -> &[String] {
        self.rows.get(1..).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of data rows.
    pub fn data_len(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.collect::<Vec<_>>().join(",")
}

/// Flattens one JSON value into a CSV cell the way `Array.join` would:
/// strings verbatim, numbers and booleans via display, null as empty.
fn flatten_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        nested => serde_json::to_string(nested).unwrap_or_default(),
    }
}
