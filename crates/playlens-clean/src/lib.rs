#![deny(unsafe_code)]

pub mod aggregate;
pub mod normalize;
pub mod text;

pub use aggregate::{
    FlatPlayRow, GenreUser, calculate_total_price, correspond, correspond_total,
    create_dict_genre,
};
pub use normalize::{
    DEFAULT_DATE_PATTERNS, FREE_PRICE_STRINGS, check_duplicates_summary, check_none_values,
    column_data_types_summary, convert_column_to_dates, convert_column_to_numeric,
    convert_special_strings, convert_to_date, convert_to_numeric, extract_values, merge_values,
    remove_duplicates, remove_none_values, report_summary,
};
pub use text::{DEFAULT_FILTER_WORDS, preprocess_text, preprocess_text_with_filter};
