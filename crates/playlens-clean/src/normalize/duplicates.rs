//! Duplicate detection and removal keyed on a single column.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use playlens_model::{DuplicateEntry, RemovedRows, Result, Table, TableError};
use tracing::info;

/// Drop rows whose column value was already seen, keeping the first
/// occurrence in original order. Missing cells compare equal to each other.
pub fn remove_duplicates(table: &mut Table, column_name: &str) -> Result<RemovedRows> {
    if !table.has_column(column_name) {
        return Err(TableError::MissingColumn(column_name.to_string()));
    }
    let initial_rows = table.height();
    let mut seen = BTreeSet::new();
    table
        .rows
        .retain(|row| seen.insert(row.cell(column_name).key()));
    let rows_removed = initial_rows - table.height();
    info!(
        column = column_name,
        removed = rows_removed,
        "removed duplicate rows"
    );
    Ok(RemovedRows {
        column_name: column_name.to_string(),
        rows_removed,
    })
}

/// Occurrence counts for every value that appears more than once, sorted by
/// descending count (ties keep first-occurrence order).
pub fn check_duplicates_summary(table: &Table, column_name: &str) -> Result<Vec<DuplicateEntry>> {
    if !table.has_column(column_name) {
        return Err(TableError::MissingColumn(column_name.to_string()));
    }
    let mut order: Vec<String> = Vec::new();
    let mut counts: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for row in &table.rows {
        let cell = row.cell(column_name);
        let key = cell.key();
        match counts.get_mut(&key) {
            Some((count, _)) => *count += 1,
            None => {
                counts.insert(key.clone(), (1, order.len()));
                order.push(key);
            }
        }
    }
    let mut entries: Vec<(usize, usize, String)> = counts
        .into_iter()
        .filter(|(_, (count, _))| *count > 1)
        .map(|(key, (count, first_seen))| (count, first_seen, key))
        .collect();
    entries.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    let summary = entries
        .into_iter()
        .map(|(occurrences, _, key)| {
            // Recover the first cell bearing this key for the report.
            let value = table
                .rows
                .iter()
                .map(|row| row.cell(column_name))
                .find(|cell| cell.key() == key)
                .cloned()
                .unwrap_or(playlens_model::CellValue::Missing);
            DuplicateEntry { value, occurrences }
        })
        .collect();
    Ok(summary)
}
