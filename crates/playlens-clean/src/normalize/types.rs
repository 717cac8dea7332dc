//! Per-column data-type census.

use std::collections::BTreeMap;

use playlens_model::{Result, Table, TableError, TypeCounts};

/// Count cells per value variant. Useful for spotting columns that still
/// mix raw text with decoded values after preparation.
pub fn column_data_types_summary(table: &Table, column_name: &str) -> Result<TypeCounts> {
    if !table.has_column(column_name) {
        return Err(TableError::MissingColumn(column_name.to_string()));
    }
    let mut data_type_counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in &table.rows {
        let name = row.cell(column_name).type_name().to_string();
        *data_type_counts.entry(name).or_insert(0) += 1;
    }
    Ok(TypeCounts {
        column_name: column_name.to_string(),
        data_type_counts,
    })
}
