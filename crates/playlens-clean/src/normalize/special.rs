//! Special-string mapping for columns that mix prices with marketing text.

use std::collections::BTreeSet;

use playlens_model::{CellValue, ConvertSummary, FailedCell, Result, Table, TableError};
use tracing::debug;

/// Catalog strings that all mean "costs nothing". Matched case-insensitively
/// against the `price` column during preparation.
pub const FREE_PRICE_STRINGS: &[&str] = &[
    "free to play",
    "free",
    "free demo",
    "free to use",
    "free mod",
    "free to try",
    "install theme",
    "play the demo",
    "play for free!",
    "install now",
    "play warmachine: tactics demo",
    "third-party",
    "play now",
    "free hitman\u{2122} holiday pack",
];

/// Replace special strings with a fixed value, numeric-coercing the rest.
///
/// Matching is case-insensitive. Missing cells and already-decoded
/// non-text cells pass through unchanged and unreported; only text that is
/// neither special nor numeric is recorded as failed.
pub fn convert_special_strings(
    table: &mut Table,
    column_name: &str,
    special_strings: &[&str],
    replacement: &CellValue,
) -> Result<ConvertSummary> {
    if !table.has_column(column_name) {
        return Err(TableError::MissingColumn(column_name.to_string()));
    }
    let special: BTreeSet<String> = special_strings
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let mut summary = ConvertSummary::new(column_name, table.height());
    for (idx, row) in table.rows.iter_mut().enumerate() {
        let cell = row.cell(column_name).clone();
        let CellValue::Text(s) = cell else {
            continue;
        };
        if special.contains(&s.to_lowercase()) {
            row.set(column_name, replacement.clone());
            continue;
        }
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            row.set(column_name, CellValue::Int(v));
        } else if let Ok(v) = trimmed.parse::<f64>() {
            row.set(column_name, CellValue::Float(v));
        } else {
            summary.record(idx, FailedCell::Scalar(CellValue::Text(s)));
        }
    }
    debug!(
        column = column_name,
        failed = summary.num_failed_conversions,
        "special-string conversion"
    );
    Ok(summary)
}
