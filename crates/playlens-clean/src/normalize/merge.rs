//! Merging paired list columns.

use std::collections::BTreeMap;

use playlens_model::{CellValue, Result, Table, TableError};

/// Merge two list columns row by row into the first column.
///
/// Elements keep first-occurrence order and duplicates are dropped. A
/// non-list side contributes nothing; two non-list sides leave an empty
/// list.
pub fn merge_values(table: &mut Table, column_name_1: &str, column_name_2: &str) -> Result<()> {
    for column in [column_name_1, column_name_2] {
        if !table.has_column(column) {
            return Err(TableError::MissingColumn(column.to_string()));
        }
    }
    for row in &mut table.rows {
        let mut merged: Vec<CellValue> = Vec::new();
        for column in [column_name_1, column_name_2] {
            if let CellValue::List(items) = row.cell(column) {
                for item in items {
                    if !merged.contains(item) {
                        merged.push(item.clone());
                    }
                }
            }
        }
        row.set(column_name_1, CellValue::List(merged));
    }
    Ok(())
}

/// Collect the rows whose cell holds a non-empty list (or non-empty text),
/// keyed by row index. Used to report leftover unmatched values after a
/// cleaning pass.
pub fn report_summary(table: &Table, column_name: &str) -> Result<BTreeMap<usize, CellValue>> {
    if !table.has_column(column_name) {
        return Err(TableError::MissingColumn(column_name.to_string()));
    }
    let mut summary = BTreeMap::new();
    for (idx, row) in table.rows.iter().enumerate() {
        let cell = row.cell(column_name);
        let keep = match cell {
            CellValue::List(items) => !items.is_empty(),
            CellValue::Text(s) => !s.is_empty(),
            _ => false,
        };
        if keep {
            summary.insert(idx, cell.clone());
        }
    }
    Ok(summary)
}
