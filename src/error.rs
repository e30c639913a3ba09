use thiserror::Error;

pub type FieldResult<T> = Result<T, FieldError>;

#[derive(Error, Debug)]
pub enum FieldError {
    /// No point survived parsing or outlier filtering
    #[error("batch '{0}' has no usable measurement points")]
    EmptyBatch(String),

    #[error("invalid grid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("render error: {0}")]
    Render(String),
}

/// Why a single raw row could not become a measurement point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("row {line}: expected {expected} fields, got {actual}")]
    WrongArity { line: usize, expected: usize, actual: usize },

    #[error("row {line}: field '{field}' is not a number: '{raw}'")]
    InvalidNumber { line: usize, field: &'static str, raw: String },
}
