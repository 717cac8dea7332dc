use thiserror::Error;

/// Failures raised by table-level transforms.
///
/// Every normalizer reports a missing column the same way; the display text
/// is part of the public contract and is matched verbatim by callers that
/// forward it into API responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Column '{0}' not found in the DataFrame")]
    MissingColumn(String),
    #[error("keys and new_columns length must be the same")]
    LengthMismatch,
}

pub type Result<T> = std::result::Result<T, TableError>;
