//! Date checks used by the review query.

use chrono::NaiveDate;
use playlens_model::CellValue;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Strict `yyyy-mm-dd` check, tolerating surrounding whitespace.
pub fn valid_date_string(date_str: &str) -> bool {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT).is_ok()
}

pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT).ok()
}

/// Scan a posted-date list for entries inside `[start, end]`, inclusive on
/// both endpoints.
///
/// Returns whether anything matched plus the positional indices that did.
/// Entries that are not text or do not parse are silently skipped.
pub fn date_in_range(dates: &[CellValue], start: NaiveDate, end: NaiveDate) -> (bool, Vec<usize>) {
    let mut matching = Vec::new();
    for (idx, entry) in dates.iter().enumerate() {
        let Some(text) = entry.as_text() else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) else {
            continue;
        };
        if start <= date && date <= end {
            matching.push(idx);
        }
    }
    (!matching.is_empty(), matching)
}
