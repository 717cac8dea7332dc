#![deny(unsafe_code)]

pub mod error;
pub mod summary;
pub mod table;
pub mod value;

pub use error::{Result, TableError};
pub use summary::{
    ConvertSummary, DuplicateEntry, FailedCell, NoneSummary, RemovedRows, TypeCounts,
};
pub use table::{Row, Table};
pub use value::{CellValue, MISSING};
