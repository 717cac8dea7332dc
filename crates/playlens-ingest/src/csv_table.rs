use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use playlens_model::{CellValue, Table};

use crate::error::IngestError;
use crate::literal::render_csv_cell;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a table.
///
/// The first row is the header; empty cells become `Missing`, everything
/// else stays raw text for the literal decoder and the normalizers to
/// widen. Fully-empty rows are dropped, short rows are padded.
pub fn read_table(path: &Path) -> Result<Table, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(Table::default());
    }
    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let rows = raw_rows.split_off(1);
    let table = Table::from_string_rows(headers, rows);
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.columns.len(),
        "read csv table"
    );
    Ok(table)
}

/// Write a table back to CSV. Text cells stay bare, missing cells stay
/// empty, and nested values render in the literal grammar so a later
/// `read_table` + decode round-trips them.
pub fn write_table(table: &Table, path: &Path) -> Result<(), IngestError> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| render_csv_cell(row.cell(column)))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Per-column shape statistics used by the inspect report.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColumnHint {
    pub is_numeric: bool,
    pub unique_ratio: f64,
    pub null_ratio: f64,
}

fn cell_is_numeric(cell: &CellValue) -> bool {
    match cell {
        CellValue::Int(_) | CellValue::Float(_) => true,
        CellValue::Text(s) => s.trim().parse::<f64>().is_ok(),
        _ => false,
    }
}

pub fn build_column_hints(table: &Table) -> BTreeMap<String, ColumnHint> {
    let mut hints = BTreeMap::new();
    let row_count = table.height();
    for column in &table.columns {
        let mut non_null = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for row in &table.rows {
            let cell = row.cell(column);
            if cell.is_missing() {
                continue;
            }
            non_null += 1;
            uniques.insert(cell.key());
            if cell_is_numeric(cell) {
                numeric += 1;
            }
        }
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            (row_count.saturating_sub(non_null)) as f64 / row_count as f64
        };
        let unique_ratio = if non_null == 0 {
            0.0
        } else {
            uniques.len() as f64 / non_null as f64
        };
        let is_numeric = non_null > 0 && numeric == non_null;
        hints.insert(
            column.clone(),
            ColumnHint {
                is_numeric,
                unique_ratio,
                null_ratio,
            },
        );
    }
    hints
}
