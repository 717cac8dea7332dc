//! Null census and removal.

use playlens_model::{NoneSummary, RemovedRows, Result, Table, TableError};
use tracing::info;

fn row_missing_count(row: &playlens_model::Row, columns: &[String]) -> usize {
    columns
        .iter()
        .filter(|column| row.cell(column).is_missing())
        .count()
}

/// Count missing cells in a column.
///
/// When `min_none_null_values` is given, also counts rows whose non-missing
/// cell count across all columns falls below
/// `num_columns - min_none_null_values`.
pub fn check_none_values(
    table: &Table,
    column_name: &str,
    min_none_null_values: Option<usize>,
) -> Result<NoneSummary> {
    if !table.has_column(column_name) {
        return Err(TableError::MissingColumn(column_name.to_string()));
    }
    let num_none_values = table
        .rows
        .iter()
        .filter(|row| row.cell(column_name).is_missing())
        .count();
    let rows_below_threshold = min_none_null_values.map(|min| {
        let num_columns = table.columns.len();
        let required = num_columns.saturating_sub(min);
        table
            .rows
            .iter()
            .filter(|row| num_columns - row_missing_count(row, &table.columns) < required)
            .count()
    });
    Ok(NoneSummary {
        column_name: column_name.to_string(),
        total_rows: table.height(),
        num_none_values,
        rows_below_threshold,
    })
}

/// Drop rows with a missing cell in the column.
///
/// When `max_row_nulls` is given, rows with more than that many missing
/// cells across the whole row are dropped as well.
pub fn remove_none_values(
    table: &mut Table,
    column_name: &str,
    max_row_nulls: Option<usize>,
) -> Result<RemovedRows> {
    if !table.has_column(column_name) {
        return Err(TableError::MissingColumn(column_name.to_string()));
    }
    let initial_rows = table.height();
    let columns = table.columns.clone();
    table.rows.retain(|row| {
        if row.cell(column_name).is_missing() {
            return false;
        }
        match max_row_nulls {
            Some(max) => row_missing_count(row, &columns) <= max,
            None => true,
        }
    });
    let rows_removed = initial_rows - table.height();
    info!(
        column = column_name,
        removed = rows_removed,
        "removed rows with missing values"
    );
    Ok(RemovedRows {
        column_name: column_name.to_string(),
        rows_removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use playlens_model::{CellValue, Row};

    fn table_with_nulls() -> Table {
        let columns = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut table = Table::new(columns);
        let values: Vec<Vec<Option<i64>>> = vec![
            vec![Some(1), Some(2), Some(3)],
            vec![None, Some(2), Some(3)],
            vec![Some(1), None, None],
            vec![None, None, None],
        ];
        for row_values in values {
            let mut row = Row::new();
            for (column, value) in ["a", "b", "c"].iter().zip(row_values) {
                let cell = match value {
                    Some(v) => CellValue::Int(v),
                    None => CellValue::Missing,
                };
                row.set(column, cell);
            }
            table.push_row(row);
        }
        table
    }

    #[test]
    fn counts_nulls_in_column_and_sparse_rows() {
        let table = table_with_nulls();
        let summary = check_none_values(&table, "a", None).expect("summary");
        assert_eq!(summary.total_rows, 4);
        assert_eq!(summary.num_none_values, 2);
        assert_eq!(summary.rows_below_threshold, None);

        // threshold: rows with fewer than 3 - 1 = 2 non-missing cells
        let summary = check_none_values(&table, "a", Some(1)).expect("summary");
        assert_eq!(summary.rows_below_threshold, Some(2));
    }

    #[test]
    fn removes_rows_with_nulls_in_column() {
        let mut table = table_with_nulls();
        let summary = remove_none_values(&mut table, "a", None).expect("remove");
        assert_eq!(summary.rows_removed, 2);
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn row_wide_threshold_drops_sparse_rows_too() {
        let mut table = table_with_nulls();
        let summary = remove_none_values(&mut table, "a", Some(1)).expect("remove");
        // Row 2 survives the column check but carries two missing cells.
        assert_eq!(summary.rows_removed, 3);
        assert_eq!(table.height(), 1);
    }
}
