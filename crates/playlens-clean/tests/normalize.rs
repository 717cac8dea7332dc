//! End-to-end normalization behavior over decoded tables.

use playlens_clean::{
    check_none_values, convert_column_to_dates, convert_column_to_numeric,
    convert_special_strings, extract_values, remove_duplicates,
};
use playlens_ingest::decode_table;
use playlens_model::{CellValue, FailedCell, Row, Table, TableError};

fn single_column(name: &str, cells: Vec<CellValue>) -> Table {
    let mut table = Table::new(vec![name.to_string()]);
    for cell in cells {
        let mut row = Row::new();
        row.set(name, cell);
        table.push_row(row);
    }
    table
}

#[test]
fn numeric_conversion_keeps_failures_in_place_and_reports_them() {
    let mut table = single_column(
        "v",
        vec![
            CellValue::Text("3".into()),
            CellValue::Text("x".into()),
            CellValue::Int(5),
        ],
    );
    let summary = convert_column_to_numeric(&mut table, "v").expect("convert");

    assert_eq!(table.rows[0].cell("v"), &CellValue::Int(3));
    assert_eq!(table.rows[1].cell("v"), &CellValue::Text("x".into()));
    assert_eq!(table.rows[2].cell("v"), &CellValue::Int(5));
    assert_eq!(summary.num_failed_conversions, 1);
    assert_eq!(
        summary.report.get(&1),
        Some(&FailedCell::Scalar(CellValue::Text("x".into())))
    );
}

#[test]
fn numeric_conversion_recurses_into_lists_with_nested_reports() {
    let mut table = single_column(
        "v",
        vec![CellValue::List(vec![
            CellValue::Text("1".into()),
            CellValue::Text("oops".into()),
        ])],
    );
    let summary = convert_column_to_numeric(&mut table, "v").expect("convert");

    assert_eq!(
        table.rows[0].cell("v"),
        &CellValue::List(vec![CellValue::Int(1), CellValue::Text("oops".into())])
    );
    let FailedCell::Nested(nested) = summary.report.get(&0).expect("nested report") else {
        panic!("expected nested failure");
    };
    assert_eq!(nested.get(&1), Some(&CellValue::Text("oops".into())));
}

#[test]
fn missing_column_error_is_uniform_across_transforms() {
    let mut table = single_column("v", vec![]);
    let expected = "Column 'w' not found in the DataFrame";

    let err = convert_column_to_numeric(&mut table, "w").expect_err("numeric");
    assert_eq!(err.to_string(), expected);
    let err = convert_column_to_dates(&mut table, "w", None).expect_err("dates");
    assert_eq!(err.to_string(), expected);
    let err = check_none_values(&table, "w", None).expect_err("nulls");
    assert_eq!(err.to_string(), expected);
    let err = remove_duplicates(&mut table, "w").expect_err("dedupe");
    assert_eq!(err, TableError::MissingColumn("w".to_string()));
}

#[test]
fn date_conversion_normalizes_lists_of_posted_dates() {
    let mut table = single_column(
        "posted",
        vec![CellValue::List(vec![
            CellValue::Text("2020-01-01".into()),
            CellValue::Text("bad-date".into()),
        ])],
    );
    let summary = convert_column_to_dates(&mut table, "posted", None).expect("convert");

    assert_eq!(
        table.rows[0].cell("posted"),
        &CellValue::List(vec![
            CellValue::Text("2020-01-01".into()),
            CellValue::Text("bad-date".into()),
        ])
    );
    assert_eq!(summary.num_failed_conversions, 1);
}

#[test]
fn price_cleaning_pipeline_over_a_raw_catalog() {
    // Raw catalog the way it comes off disk: text everywhere, marketing
    // strings in the price column, duplicate ids.
    let mut table = Table::from_string_rows(
        vec!["id".to_string(), "price".to_string()],
        vec![
            vec!["10".to_string(), "9.99".to_string()],
            vec!["10".to_string(), "9.99".to_string()],
            vec!["20".to_string(), "Free to Play".to_string()],
            vec!["30".to_string(), "coming soon".to_string()],
        ],
    );
    decode_table(&mut table);

    let removed = remove_duplicates(&mut table, "id").expect("dedupe");
    assert_eq!(removed.rows_removed, 1);

    let summary = convert_special_strings(
        &mut table,
        "price",
        playlens_clean::FREE_PRICE_STRINGS,
        &CellValue::Int(0),
    )
    .expect("special strings");

    assert_eq!(table.rows[0].cell("price"), &CellValue::Float(9.99));
    assert_eq!(table.rows[1].cell("price"), &CellValue::Int(0));
    assert_eq!(
        table.rows[2].cell("price"),
        &CellValue::Text("coming soon".into())
    );
    assert_eq!(summary.num_failed_conversions, 1);
}

#[test]
fn extract_values_builds_aligned_list_columns_from_decoded_records() {
    let mut table = single_column(
        "items",
        vec![CellValue::Text(
            "[{'item_id': '10', 'playtime_forever': 6}, {'item_id': '20'}]".into(),
        )],
    );
    decode_table(&mut table);

    extract_values(
        &mut table,
        "items",
        &["item_id", "playtime_forever"],
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
        &CellValue::List(vec![CellValue::Int(6), CellValue::Missing])
    );
}
