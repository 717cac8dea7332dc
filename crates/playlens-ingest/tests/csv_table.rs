//! CSV ingestion tests against real files on disk.

use std::io::Write;

use playlens_ingest::{build_column_hints, decode_table, read_table, write_table};
use playlens_model::{CellValue, Table};

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

#[test]
fn reads_header_and_maps_empty_cells_to_missing() {
    let file = write_fixture("user_id,price\nu1,9.99\nu2,\n");
    let table = read_table(file.path()).expect("read table");
    assert_eq!(table.columns, vec!["user_id", "price"]);
    assert_eq!(table.height(), 2);
    assert_eq!(table.rows[0].cell("price"), &CellValue::Text("9.99".into()));
    assert_eq!(table.rows[1].cell("price"), &CellValue::Missing);
}

#[test]
fn strips_bom_and_pads_short_rows() {
    let file = write_fixture("\u{feff}id, name ,price\n10,Dota\n");
    let table = read_table(file.path()).expect("read table");
    assert_eq!(table.columns, vec!["id", "name", "price"]);
    assert_eq!(table.rows[0].cell("price"), &CellValue::Missing);
}

#[test]
fn skips_fully_empty_rows() {
    let file = write_fixture("id\n1\n\n2\n");
    let table = read_table(file.path()).expect("read table");
    assert_eq!(table.height(), 2);
}

#[test]
fn empty_file_yields_empty_table() {
    let file = write_fixture("");
    let table = read_table(file.path()).expect("read table");
    assert!(table.columns.is_empty());
    assert_eq!(table.height(), 0);
}

#[test]
fn written_tables_round_trip_through_decode() {
    let mut table = Table::from_string_rows(
        vec!["user_id".to_string(), "item_id".to_string()],
        vec![
            vec!["u1".to_string(), "['10', '20']".to_string()],
            vec!["u2".to_string(), String::new()],
        ],
    );
    decode_table(&mut table);

    let file = tempfile::NamedTempFile::new().expect("create temp file");
    write_table(&table, file.path()).expect("write table");
    let mut reread = read_table(file.path()).expect("reread table");
    decode_table(&mut reread);

    assert_eq!(reread, table);
}

#[test]
fn column_hints_report_numeric_null_and_unique_ratios() {
    let file = write_fixture("id,price\n1,9.99\n2,\n2,0\n3,free\n");
    let table = read_table(file.path()).expect("read table");
    let hints = build_column_hints(&table);

    let id = &hints["id"];
    assert!(id.is_numeric);
    assert_eq!(id.null_ratio, 0.0);
    assert_eq!(id.unique_ratio, 0.75);

    let price = &hints["price"];
    assert!(!price.is_numeric);
    assert_eq!(price.null_ratio, 0.25);
}
