//! Terminal report rendering.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use playlens_ingest::ColumnHint;
use playlens_model::{DuplicateEntry, NoneSummary, TypeCounts};

use crate::prepare::TableReport;

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn print_prepare_summary(reports: &[TableReport]) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Duplicates removed"),
        header_cell("Nulls removed"),
        header_cell("Failed conversions"),
    ]);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for report in reports {
        table.add_row(vec![
            Cell::new(report.name),
            Cell::new(report.rows),
            Cell::new(report.duplicates_removed),
            Cell::new(report.nulls_removed),
            Cell::new(report.failed_conversions),
        ]);
    }
    println!("{table}");
}

pub fn print_column_hints(table_name: &str, hints: &BTreeMap<String, ColumnHint>) {
    println!("Columns of '{table_name}':");
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Numeric"),
        header_cell("Null ratio"),
        header_cell("Unique ratio"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (column, hint) in hints {
        table.add_row(vec![
            Cell::new(column),
            Cell::new(if hint.is_numeric { "yes" } else { "no" }),
            Cell::new(format!("{:.2}", hint.null_ratio)),
            Cell::new(format!("{:.2}", hint.unique_ratio)),
        ]);
    }
    println!("{table}");
}

pub fn print_column_detail(
    types: &TypeCounts,
    nulls: &NoneSummary,
    duplicates: &[DuplicateEntry],
) {
    println!(
        "Column '{}': {} rows, {} missing",
        types.column_name, nulls.total_rows, nulls.num_none_values
    );

    let mut table = styled_table();
    table.set_header(vec![header_cell("Type"), header_cell("Count")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, count) in &types.data_type_counts {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    println!("{table}");

    if duplicates.is_empty() {
        println!("No duplicated values.");
        return;
    }
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Duplicated value"),
        header_cell("Occurrences"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in duplicates {
        table.add_row(vec![Cell::new(entry.value.key()), Cell::new(entry.occurrences)]);
    }
    println!("{table}");
}
