use std::collections::BTreeMap;

use crate::value::{CellValue, MISSING};

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell by column name; absent cells read as `Missing`.
    pub fn cell(&self, name: &str) -> &CellValue {
        self.cells.get(name).unwrap_or(&MISSING)
    }

    pub fn cell_mut(&mut self, name: &str) -> Option<&mut CellValue> {
        self.cells.get_mut(name)
    }

    pub fn set(&mut self, name: &str, value: CellValue) {
        self.cells.insert(name.to_string(), value);
    }
}

/// An ordered sequence of rows with a declared column order.
///
/// Column types are nominal, not enforced: a column may mix decoded lists,
/// numbers, and raw text, which is exactly what the normalizers consume.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Append a column, padding every existing row with `Missing`.
    pub fn add_column(&mut self, name: &str) {
        if self.has_column(name) {
            return;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.set(name, CellValue::Missing);
        }
    }

    /// Cells of one column in row order.
    pub fn column_cells(&self, name: &str) -> Option<Vec<&CellValue>> {
        if !self.has_column(name) {
            return None;
        }
        Some(self.rows.iter().map(|row| row.cell(name)).collect())
    }

    /// Build a table from a header and string rows, mapping empty cells to
    /// `Missing`. Short rows are padded.
    pub fn from_string_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut table = Table::new(columns);
        for raw in rows {
            let mut row = Row::new();
            for (idx, column) in table.columns.iter().enumerate() {
                let value = raw.get(idx).map(String::as_str).unwrap_or("");
                let cell = if value.is_empty() {
                    CellValue::Missing
                } else {
                    CellValue::Text(value.to_string())
                };
                row.cells.insert(column.clone(), cell);
            }
            table.rows.push(row);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_cells_read_as_missing() {
        let table = Table::from_string_rows(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".to_string()]],
        );
        assert_eq!(table.rows[0].cell("a"), &CellValue::Text("1".into()));
        assert_eq!(table.rows[0].cell("b"), &CellValue::Missing);
        assert_eq!(table.rows[0].cell("nope"), &CellValue::Missing);
    }

    #[test]
    fn add_column_pads_existing_rows() {
        let mut table = Table::from_string_rows(
            vec!["a".to_string()],
            vec![vec!["1".to_string()], vec!["2".to_string()]],
        );
        table.add_column("extra");
        assert!(table.has_column("extra"));
        assert_eq!(table.rows[1].cell("extra"), &CellValue::Missing);
    }
}
