//! Transform summaries returned by the cleaning pipeline.
//!
//! Normalizers mutate a table in place and return one of these structs so
//! callers can report what happened without re-scanning the data.

use std::collections::BTreeMap;

use crate::value::CellValue;

/// What a conversion failure kept in place of the requested type.
///
/// Scalar cells record the original value; list cells record a nested map
/// keyed by the element index inside the list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum FailedCell {
    Scalar(CellValue),
    Nested(BTreeMap<usize, CellValue>),
}

/// Outcome of a column-wide coercion (numeric, date, special-string).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConvertSummary {
    pub total_rows: usize,
    pub column_name: String,
    pub num_failed_conversions: usize,
    /// Failures keyed by row index.
    pub report: BTreeMap<usize, FailedCell>,
}

impl ConvertSummary {
    pub fn new(column_name: &str, total_rows: usize) -> Self {
        Self {
            total_rows,
            column_name: column_name.to_string(),
            num_failed_conversions: 0,
            report: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, row: usize, failed: FailedCell) {
        self.report.insert(row, failed);
        self.num_failed_conversions = self.report.len();
    }
}

/// One value that occurs more than once in a column.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DuplicateEntry {
    pub value: CellValue,
    pub occurrences: usize,
}

/// Null census for a column, with an optional row-wide sparseness count.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NoneSummary {
    pub column_name: String,
    pub total_rows: usize,
    pub num_none_values: usize,
    /// Rows whose non-missing cell count fell below the requested
    /// threshold; `None` when the check was not requested.
    pub rows_below_threshold: Option<usize>,
}

/// Outcome of a row-removal transform.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RemovedRows {
    pub column_name: String,
    pub rows_removed: usize,
}

/// Census of value variants present in a column.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypeCounts {
    pub column_name: String,
    pub data_type_counts: BTreeMap<String, usize>,
}
