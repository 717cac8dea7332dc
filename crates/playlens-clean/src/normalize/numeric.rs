//! Numeric coercion with per-row failure reporting.

use std::collections::BTreeMap;

use playlens_model::{CellValue, ConvertSummary, FailedCell, Result, Table, TableError};
use tracing::debug;

/// Coerce a scalar cell to a number.
///
/// Already-numeric cells and missing cells pass through untouched. Text is
/// parsed as an integer first, then as a float. Returns the coerced cell
/// and whether coercion failed.
pub fn convert_to_numeric(cell: &CellValue) -> (CellValue, bool) {
    match cell {
        CellValue::Int(_) | CellValue::Float(_) | CellValue::Missing => (cell.clone(), false),
        CellValue::Bool(b) => (CellValue::Int(i64::from(*b)), false),
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if let Ok(v) = trimmed.parse::<i64>() {
                (CellValue::Int(v), false)
            } else if let Ok(v) = trimmed.parse::<f64>() {
                (CellValue::Float(v), false)
            } else {
                (cell.clone(), true)
            }
        }
        other => (other.clone(), true),
    }
}

/// Coerce every element of a list, reporting failures by element index.
pub fn convert_list_to_numeric(items: &[CellValue]) -> (BTreeMap<usize, CellValue>, Vec<CellValue>) {
    let mut converted = Vec::with_capacity(items.len());
    let mut report = BTreeMap::new();
    for (idx, item) in items.iter().enumerate() {
        let (value, failed) = convert_to_numeric(item);
        if failed {
            report.insert(idx, value.clone());
        }
        converted.push(value);
    }
    (report, converted)
}

/// Coerce a whole column in place, recursing into list cells.
pub fn convert_column_to_numeric(table: &mut Table, column_name: &str) -> Result<ConvertSummary> {
    if !table.has_column(column_name) {
        return Err(TableError::MissingColumn(column_name.to_string()));
    }
    let mut summary = ConvertSummary::new(column_name, table.height());
    for (idx, row) in table.rows.iter_mut().enumerate() {
        let cell = row.cell(column_name).clone();
        let converted = match cell {
            CellValue::List(items) => {
                let (report, converted) = convert_list_to_numeric(&items);
                if !report.is_empty() {
                    summary.record(idx, FailedCell::Nested(report));
                }
                CellValue::List(converted)
            }
            scalar => {
                let (value, failed) = convert_to_numeric(&scalar);
                if failed {
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
        "numeric conversion"
    );
    Ok(summary)
}
