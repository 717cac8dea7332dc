//! Per-row reducers over aligned list columns.
//!
//! User rows carry two positionally-aligned lists (an ID-like list and a
//! time list). A row is usable when the lists have equal length, or when
//! the time list is empty; anything else is inconsistent and is excluded
//! from aggregation and reported by row index.

use std::collections::BTreeMap;

use playlens_model::{CellValue, Result, Table, TableError};
use tracing::debug;

/// One `(id, time)` pair flattened out of a user row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlatPlayRow {
    pub key: String,
    pub time_spent: f64,
    pub user_id: String,
    pub user_url: String,
}

/// One user's contribution inside a genre group.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenreUser {
    pub user_id: String,
    pub time_spent: f64,
    pub user_url: String,
}

enum RowLists<'a> {
    Aligned(&'a [CellValue], &'a [CellValue]),
    EmptyTimes(&'a [CellValue]),
    Inconsistent,
}

fn row_lists<'a>(ids: &'a CellValue, times: &'a CellValue) -> RowLists<'a> {
    let Some(id_list) = ids.as_list() else {
        return RowLists::Inconsistent;
    };
    // A missing time cell reads as an empty time list.
    let time_list = match times {
        CellValue::List(items) => items.as_slice(),
        CellValue::Missing => &[],
        _ => return RowLists::Inconsistent,
    };
    if id_list.len() == time_list.len() {
        RowLists::Aligned(id_list, time_list)
    } else if time_list.is_empty() {
        RowLists::EmptyTimes(id_list)
    } else {
        RowLists::Inconsistent
    }
}

/// Accumulate time per ID across all rows.
///
/// Equal-length rows add every pair into the running total. Rows with an
/// empty time list initialize unseen IDs to 0 without touching existing
/// totals. Inconsistent rows contribute nothing and are reported.
pub fn correspond(
    table: &Table,
    id_column: &str,
    time_column: &str,
) -> Result<(BTreeMap<String, f64>, Vec<usize>)> {
    for column in [id_column, time_column] {
        if !table.has_column(column) {
            return Err(TableError::MissingColumn(column.to_string()));
        }
    }
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    let mut report = Vec::new();
    for (idx, row) in table.rows.iter().enumerate() {
        match row_lists(row.cell(id_column), row.cell(time_column)) {
            RowLists::Aligned(ids, times) => {
                for (id, time) in ids.iter().zip(times) {
                    *totals.entry(id.key()).or_insert(0.0) += time.as_f64().unwrap_or(0.0);
                }
            }
            RowLists::EmptyTimes(ids) => {
                for id in ids {
                    totals.entry(id.key()).or_insert(0.0);
                }
            }
            RowLists::Inconsistent => report.push(idx),
        }
    }
    debug!(
        ids = totals.len(),
        inconsistent = report.len(),
        "accumulated id/time totals"
    );
    Ok((totals, report))
}

/// Flatten aligned rows into one record per `(id, time)` pair, carrying the
/// originating user id and user URL. Same alignment rule as [`correspond`];
/// empty time lists emit pairs with time 0.
pub fn correspond_total(
    table: &Table,
    id_column: &str,
    time_column: &str,
    user_id_column: &str,
    user_url_column: &str,
) -> Result<(Vec<FlatPlayRow>, Vec<usize>)> {
    for column in [id_column, time_column, user_id_column, user_url_column] {
        if !table.has_column(column) {
            return Err(TableError::MissingColumn(column.to_string()));
        }
    }
    let mut flattened = Vec::new();
    let mut report = Vec::new();
    for (idx, row) in table.rows.iter().enumerate() {
        let user_id = row.cell(user_id_column).key();
        let user_url = row.cell(user_url_column).key();
        match row_lists(row.cell(id_column), row.cell(time_column)) {
            RowLists::Aligned(ids, times) => {
                for (id, time) in ids.iter().zip(times) {
                    flattened.push(FlatPlayRow {
                        key: id.key(),
                        time_spent: time.as_f64().unwrap_or(0.0),
                        user_id: user_id.clone(),
                        user_url: user_url.clone(),
                    });
                }
            }
            RowLists::EmptyTimes(ids) => {
                for id in ids {
                    flattened.push(FlatPlayRow {
                        key: id.key(),
                        time_spent: 0.0,
                        user_id: user_id.clone(),
                        user_url: user_url.clone(),
                    });
                }
            }
            RowLists::Inconsistent => report.push(idx),
        }
    }
    Ok((flattened, report))
}

/// Group flattened rows by their key (the genre), preserving input order
/// within each group.
pub fn create_dict_genre(rows: &[FlatPlayRow]) -> BTreeMap<String, Vec<GenreUser>> {
    let mut grouped: BTreeMap<String, Vec<GenreUser>> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.key.clone()).or_default().push(GenreUser {
            user_id: row.user_id.clone(),
            time_spent: row.time_spent,
            user_url: row.user_url.clone(),
        });
    }
    grouped
}

/// Sum a price column over every row matching each ID.
///
/// IDs are matched on their canonical key, so `10` and `"10"` find the
/// same catalog row. IDs with no match are returned, not errors.
pub fn calculate_total_price(
    ids: &[CellValue],
    table: &Table,
    id_column: &str,
    price_column: &str,
) -> Result<(f64, Vec<CellValue>)> {
    for column in [id_column, price_column] {
        if !table.has_column(column) {
            return Err(TableError::MissingColumn(column.to_string()));
        }
    }
    let mut total_price = 0.0;
    let mut non_matching = Vec::new();
    for id in ids {
        let wanted = id.key();
        let mut matched = false;
        for row in &table.rows {
            if row.cell(id_column).key() == wanted {
                matched = true;
                total_price += row.cell(price_column).as_f64().unwrap_or(0.0);
            }
        }
        if !matched {
            non_matching.push(id.clone());
        }
    }
    Ok((total_price, non_matching))
}

#[cfg(test)]
mod tests {
    use super::*;
    use playlens_model::Row;

    fn list_of(texts: &[&str]) -> CellValue {
        CellValue::List(
            texts
                .iter()
                .map(|t| CellValue::Text((*t).to_string()))
                .collect(),
        )
    }

    fn times_of(values: &[i64]) -> CellValue {
        CellValue::List(values.iter().map(|v| CellValue::Int(*v)).collect())
    }

    fn user_table(rows: Vec<(CellValue, CellValue)>) -> Table {
        let mut table = Table::new(vec![
            "genres".to_string(),
            "time_spent".to_string(),
            "user_id".to_string(),
            "user_url".to_string(),
        ]);
        for (idx, (ids, times)) in rows.into_iter().enumerate() {
            let mut row = Row::new();
            row.set("genres", ids);
            row.set("time_spent", times);
            row.set("user_id", CellValue::Text(format!("u{idx}")));
            row.set("user_url", CellValue::Text(format!("http://u/{idx}")));
            table.push_row(row);
        }
        table
    }

    #[test]
    fn empty_time_list_does_not_overwrite_existing_totals() {
        let table = user_table(vec![
            (list_of(&["a", "b"]), times_of(&[10, 20])),
            (list_of(&["a"]), times_of(&[])),
        ]);
        let (totals, report) = correspond(&table, "genres", "time_spent").expect("correspond");
        assert!(report.is_empty());
        assert_eq!(totals.get("a"), Some(&10.0));
        assert_eq!(totals.get("b"), Some(&20.0));
    }

    #[test]
    fn mismatched_lengths_are_reported_and_skipped() {
        let table = user_table(vec![
            (list_of(&["a"]), times_of(&[5, 6])),
            (list_of(&["b"]), times_of(&[7])),
        ]);
        let (totals, report) = correspond(&table, "genres", "time_spent").expect("correspond");
        assert_eq!(report, vec![0]);
        assert!(!totals.contains_key("a"));
        assert_eq!(totals.get("b"), Some(&7.0));
    }

    #[test]
    fn repeated_ids_accumulate() {
        let table = user_table(vec![
            (list_of(&["a"]), times_of(&[5])),
            (list_of(&["a"]), times_of(&[6])),
        ]);
        let (totals, _) = correspond(&table, "genres", "time_spent").expect("correspond");
        assert_eq!(totals.get("a"), Some(&11.0));
    }

    #[test]
    fn flattening_emits_one_row_per_pair() {
        let table = user_table(vec![(list_of(&["a", "b"]), times_of(&[10, 20]))]);
        let (rows, report) =
            correspond_total(&table, "genres", "time_spent", "user_id", "user_url")
                .expect("flatten");
        assert!(report.is_empty());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "a");
        assert_eq!(rows[0].time_spent, 10.0);
        assert_eq!(rows[0].user_id, "u0");
        assert_eq!(rows[1].key, "b");
    }

    #[test]
    fn grouping_preserves_input_order_within_genre() {
        let rows = vec![
            FlatPlayRow {
                key: "action".into(),
                time_spent: 5.0,
                user_id: "u0".into(),
                user_url: "url0".into(),
            },
            FlatPlayRow {
                key: "indie".into(),
                time_spent: 9.0,
                user_id: "u1".into(),
                user_url: "url1".into(),
            },
            FlatPlayRow {
                key: "action".into(),
                time_spent: 7.0,
                user_id: "u2".into(),
                user_url: "url2".into(),
            },
        ];
        let grouped = create_dict_genre(&rows);
        let action = &grouped["action"];
        assert_eq!(action.len(), 2);
        assert_eq!(action[0].user_id, "u0");
        assert_eq!(action[1].user_id, "u2");
    }

    #[test]
    fn total_price_sums_every_matching_row() {
        let mut table = Table::new(vec!["id".to_string(), "price".to_string()]);
        for (id, price) in [("10", 5.0), ("10", 2.5), ("20", 1.0)] {
            let mut row = Row::new();
            row.set("id", CellValue::Text(id.to_string()));
            row.set("price", CellValue::Float(price));
            table.push_row(row);
        }
        let ids = vec![CellValue::Int(10), CellValue::Text("30".into())];
        let (total, missing) =
            calculate_total_price(&ids, &table, "id", "price").expect("total price");
        assert_eq!(total, 7.5);
        assert_eq!(missing, vec![CellValue::Text("30".into())]);
    }
}
