//! Nested-record field extraction.

use playlens_model::{CellValue, Result, Table, TableError};

/// Pull named fields out of a column of record lists into new list columns.
///
/// `keys` and `new_columns` pair up positionally: for each row, the new
/// column receives one entry per record in the source list — the record's
/// value at the key, or `Missing` when the record lacks it. Source cells
/// that are not lists yield empty lists.
pub fn extract_values(
    table: &mut Table,
    column_name: &str,
    keys: &[&str],
    new_columns: &[&str],
) -> Result<()> {
    if keys.len() != new_columns.len() {
        return Err(TableError::LengthMismatch);
    }
    if !table.has_column(column_name) {
        return Err(TableError::MissingColumn(column_name.to_string()));
    }
    for column in new_columns {
        table.add_column(column);
    }
    for row in &mut table.rows {
        let source = row.cell(column_name).clone();
        let items = source.as_list().unwrap_or(&[]);
        for (key, column) in keys.iter().zip(new_columns) {
            let mut extracted = Vec::with_capacity(items.len());
            for item in items {
                let value = match item {
                    CellValue::Record(fields) => {
                        fields.get(*key).cloned().unwrap_or(CellValue::Missing)
                    }
                    _ => CellValue::Missing,
                };
                extracted.push(value);
            }
            row.set(column, CellValue::List(extracted));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use playlens_model::Row;
    use std::collections::BTreeMap;

    fn record(pairs: &[(&str, CellValue)]) -> CellValue {
        let mut fields = BTreeMap::new();
        for (key, value) in pairs {
            fields.insert((*key).to_string(), value.clone());
        }
        CellValue::Record(fields)
    }

    #[test]
    fn extracts_one_list_column_per_key() {
        let mut table = Table::new(vec!["items".to_string()]);
        let mut row = Row::new();
        row.set(
            "items",
            CellValue::List(vec![
                record(&[
                    ("item_id", CellValue::Text("10".into())),
                    ("playtime", CellValue::Int(5)),
                ]),
                record(&[("item_id", CellValue::Text("20".into()))]),
            ]),
        );
        table.push_row(row);

        extract_values(
            &mut table,
            "items",
            &["item_id", "playtime"],
            &["item_id", "time_spent"],
        )
        .expect("extract");

        assert_eq!(
            table.rows[0].cell("item_id"),
            &CellValue::List(vec![
                CellValue::Text("10".into()),
                CellValue::Text("20".into()),
            ])
        );
        assert_eq!(
            table.rows[0].cell("time_spent"),
            &CellValue::List(vec![CellValue::Int(5), CellValue::Missing])
        );
    }

    #[test]
    fn mismatched_key_and_column_lists_are_rejected() {
        let mut table = Table::new(vec!["items".to_string()]);
        let err = extract_values(&mut table, "items", &["a", "b"], &["only"])
            .expect_err("length mismatch");
        assert_eq!(err, TableError::LengthMismatch);
        assert_eq!(
            err.to_string(),
            "keys and new_columns length must be the same"
        );
    }

    #[test]
    fn non_list_cells_extract_to_empty_lists() {
        let mut table = Table::new(vec!["items".to_string()]);
        let mut row = Row::new();
        row.set("items", CellValue::Missing);
        table.push_row(row);

        extract_values(&mut table, "items", &["item_id"], &["item_id"]).expect("extract");
        assert_eq!(table.rows[0].cell("item_id"), &CellValue::List(vec![]));
    }
}
