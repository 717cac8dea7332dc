pub mod csv_table;
pub mod dataset;
pub mod error;
pub mod literal;

pub use csv_table::{ColumnHint, build_column_hints, read_table, write_table};
pub use dataset::DatasetPaths;
pub use error::IngestError;
pub use literal::{decode_cell, decode_literal, decode_table, encode_cell, render_csv_cell};
