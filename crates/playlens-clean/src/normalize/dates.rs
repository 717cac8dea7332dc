//! Date coercion to the canonical `yyyy-mm-dd` form.
//!
//! Input patterns are tried in order and the first that parses wins;
//! whatever the source pattern, the output is always `%Y-%m-%d`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use playlens_model::{CellValue, ConvertSummary, FailedCell, Result, Table, TableError};
use tracing::debug;

/// Patterns tried when the caller does not supply any.
pub const DEFAULT_DATE_PATTERNS: &[&str] = &["%Y-%m-%d"];

const OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Coerce a scalar cell to a normalized date string.
///
/// Returns the coerced cell and whether parsing succeeded. Only text cells
/// are candidates; everything else (including missing cells) is left
/// unchanged and reported as failed.
pub fn convert_to_date(cell: &CellValue, patterns: &[&str]) -> (CellValue, bool) {
    let CellValue::Text(s) = cell else {
        return (cell.clone(), false);
    };
    for pattern in patterns {
        if let Ok(date) = NaiveDate::parse_from_str(s, pattern) {
            let formatted = date.format(OUTPUT_FORMAT).to_string();
            return (CellValue::Text(formatted), true);
        }
    }
    (cell.clone(), false)
}

/// Coerce every element of a list, reporting failures by element index.
pub fn convert_list_to_dates(
    items: &[CellValue],
    patterns: &[&str],
) -> (BTreeMap<usize, CellValue>, Vec<CellValue>) {
    let mut converted = Vec::with_capacity(items.len());
    let mut report = BTreeMap::new();
    for (idx, item) in items.iter().enumerate() {
        let (value, ok) = convert_to_date(item, patterns);
        if !ok {
            report.insert(idx, value.clone());
        }
        converted.push(value);
    }
    (report, converted)
}

/// Coerce a whole column in place, recursing into list cells.
pub fn convert_column_to_dates(
    table: &mut Table,
    column_name: &str,
    patterns: Option<&[&str]>,
) -> Result<ConvertSummary> {
    if !table.has_column(column_name) {
        return Err(TableError::MissingColumn(column_name.to_string()));
    }
    let patterns = patterns.unwrap_or(DEFAULT_DATE_PATTERNS);
    let mut summary = ConvertSummary::new(column_name, table.height());
    for (idx, row) in table.rows.iter_mut().enumerate() {
        let cell = row.cell(column_name).clone();
        let converted = match cell {
            CellValue::List(items) => {
                let (report, converted) = convert_list_to_dates(&items, patterns);
                if !report.is_empty() {
                    summary.record(idx, FailedCell::Nested(report));
                }
                CellValue::List(converted)
            }
            scalar => {
                let (value, ok) = convert_to_date(&scalar, patterns);
                if !ok {
                    summary.record(idx, FailedCell::Scalar(scalar));
                }
                value
            }
        };
        row.set(column_name, converted);
    }
    debug!(
        column = column_name,
        failed = summary.num_failed_conversions,
        "date conversion"
    );
    Ok(summary)
}
