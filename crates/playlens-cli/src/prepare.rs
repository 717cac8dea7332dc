//! Offline preparation stage.
//!
//! Reads the raw CSVs, decodes literal-encoded cells, applies the
//! per-dataset cleaning steps, and writes prepared copies for the query
//! surface to load.

use anyhow::{Context, Result};
use playlens_clean::{
    FREE_PRICE_STRINGS, convert_column_to_dates, convert_column_to_numeric,
    convert_special_strings, remove_duplicates, remove_none_values,
};
use playlens_ingest::{DatasetPaths, decode_table, read_table, write_table};
use playlens_model::CellValue;
use tracing::info;

/// What happened to one dataset during preparation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub name: &'static str,
    pub rows: usize,
    pub duplicates_removed: usize,
    pub nulls_removed: usize,
    pub failed_conversions: usize,
}

/// Clean all three datasets, writing prepared copies to `output`.
pub fn prepare_datasets(paths: &DatasetPaths, output: &DatasetPaths) -> Result<Vec<TableReport>> {
    Ok(vec![
        prepare_games(paths, output)?,
        prepare_users(paths, output)?,
        prepare_reviews(paths, output)?,
    ])
}

/// Games catalog: drop rows without an id, dedupe on id, map the
/// free-to-play string family to price 0, numeric-coerce the rest.
fn prepare_games(paths: &DatasetPaths, output: &DatasetPaths) -> Result<TableReport> {
    let mut table = read_table(&paths.games)
        .with_context(|| format!("read games data: {}", paths.games.display()))?;
    decode_table(&mut table);
    let nulls = remove_none_values(&mut table, "id", None)?;
    let duplicates = remove_duplicates(&mut table, "id")?;
    let prices =
        convert_special_strings(&mut table, "price", FREE_PRICE_STRINGS, &CellValue::Int(0))?;
    write_table(&table, &output.games)
        .with_context(|| format!("write games data: {}", output.games.display()))?;
    info!(rows = table.height(), "prepared games catalog");
    Ok(TableReport {
        name: "games",
        rows: table.height(),
        duplicates_removed: duplicates.rows_removed,
        nulls_removed: nulls.rows_removed,
        failed_conversions: prices.num_failed_conversions,
    })
}

/// User records: decode the literal-encoded list columns and coerce the
/// item count. Users are intentionally not deduplicated; user_id is not
/// guaranteed unique in the source.
fn prepare_users(paths: &DatasetPaths, output: &DatasetPaths) -> Result<TableReport> {
    let mut table = read_table(&paths.users)
        .with_context(|| format!("read user data: {}", paths.users.display()))?;
    decode_table(&mut table);
    let counts = convert_column_to_numeric(&mut table, "items_count")?;
    write_table(&table, &output.users)
        .with_context(|| format!("write user data: {}", output.users.display()))?;
    info!(rows = table.height(), "prepared user records");
    Ok(TableReport {
        name: "users",
        rows: table.height(),
        duplicates_removed: 0,
        nulls_removed: 0,
        failed_conversions: counts.num_failed_conversions,
    })
}

/// Review records: decode, then normalize every posted date to yyyy-mm-dd.
fn prepare_reviews(paths: &DatasetPaths, output: &DatasetPaths) -> Result<TableReport> {
    let mut table = read_table(&paths.reviews)
        .with_context(|| format!("read review data: {}", paths.reviews.display()))?;
    decode_table(&mut table);
    let dates = convert_column_to_dates(&mut table, "posted", None)?;
    write_table(&table, &output.reviews)
        .with_context(|| format!("write review data: {}", output.reviews.display()))?;
    info!(rows = table.height(), "prepared review records");
    Ok(TableReport {
        name: "reviews",
        rows: table.height(),
        duplicates_removed: 0,
        nulls_removed: 0,
        failed_conversions: dates.num_failed_conversions,
    })
}
