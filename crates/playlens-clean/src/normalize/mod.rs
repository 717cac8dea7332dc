//! Column-level transforms.
//!
//! Every transform takes the table and a column name, mutates the table in
//! place, and returns a summary of what happened. A missing column is the
//! uniform failure across the whole family.

pub mod dates;
pub mod duplicates;
pub mod merge;
pub mod nested;
pub mod nulls;
pub mod numeric;
pub mod special;
pub mod types;

pub use dates::{DEFAULT_DATE_PATTERNS, convert_column_to_dates, convert_to_date};
pub use duplicates::{check_duplicates_summary, remove_duplicates};
pub use merge::{merge_values, report_summary};
pub use nested::extract_values;
pub use nulls::{check_none_values, remove_none_values};
pub use numeric::{convert_column_to_numeric, convert_to_numeric};
pub use special::{FREE_PRICE_STRINGS, convert_special_strings};
pub use types::column_data_types_summary;
