use thiserror::Error;

/// Recoverable failures surfaced by form components.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("picker column {column} does not contain the value '{value}'")]
    ValueMismatch { column: usize, value: String },

    #[error("expected {expected} picker values, one per column, but got {found}")]
    ColumnCountMismatch { expected: usize, found: usize },

    #[error("picker column {column} has no options")]
    EmptyColumn { column: usize },

    #[error("picker has no column {column}")]
    ColumnOutOfBounds { column: usize },

    #[error("picker column {column} has no row {row}")]
    RowOutOfBounds { column: usize, row: usize },
}
