#![deny(unsafe_code)]

pub mod dates;
pub mod engine;
pub mod error;

pub use dates::{date_in_range, parse_date, valid_date_string};
pub use engine::QueryEngine;
pub use error::{QueryError, Result};
