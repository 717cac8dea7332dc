use playlens_ingest::IngestError;
use playlens_model::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// The date-range string did not hold two `yyyy-mm-dd` dates.
    #[error("Invalid date format in date_range. Use 'yyyy-mm-dd' format.")]
    InvalidDateRange,
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Table(#[from] TableError),
}

pub type Result<T> = std::result::Result<T, QueryError>;
