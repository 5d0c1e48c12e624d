use arrow::error::ArrowError;
use thiserror::Error;

use crate::reader::PhysicalType;

/// Convenience alias used throughout the crate.
pub type Result<T, E = FilterError> = std::result::Result<T, E>;

/// Errors raised while defining, binding, or evaluating record filters.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A required argument was not supplied.
    #[error("{name} should not be null")]
    NullArgument {
        /// Name of the missing argument.
        name: &'static str,
    },
    /// An argument failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A requested logical path has no matching physical column reader.
    #[error("column {path} does not exist")]
    UnresolvedColumn {
        /// The logical path as supplied by the caller.
        path: String,
    },
    /// Readers and physical types supplied to a value container differ in length.
    #[error("argument lengths are not the same: {readers} readers, {tags} types")]
    LengthMismatch {
        /// Number of readers supplied.
        readers: usize,
        /// Number of physical types supplied.
        tags: usize,
    },
    /// A container accessor was invoked against a value of another physical type.
    #[error("field {index} is not {expected}: holds {actual}")]
    TypeMismatch {
        /// Physical type the accessor reads.
        expected: PhysicalType,
        /// Physical type actually stored at `index`.
        actual: PhysicalType,
        /// Position inside the container.
        index: usize,
    },
    /// A container accessor was invoked past the end of the container.
    #[error("field {index} out of bounds (len={len})")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Number of values in the container.
        len: usize,
    },
    /// A binary value read as a string was not valid UTF-8.
    #[error("field {index} is not valid utf-8")]
    InvalidUtf8 {
        /// Position inside the container.
        index: usize,
    },
    /// A column reader was asked for a value of a type it does not declare.
    #[error("column {path} declares {declared}, cannot read {requested}")]
    ReaderTypeMismatch {
        /// Physical path of the reader, dot joined.
        path: String,
        /// Physical type the caller asked for.
        requested: PhysicalType,
        /// Physical type the reader declares.
        declared: PhysicalType,
    },
    /// The reader's current value is null.
    #[error("column {path} is null at row {row}")]
    NullValue {
        /// Physical path of the reader, dot joined.
        path: String,
        /// Current row of the reader.
        row: usize,
    },
    /// The reader's cursor is positioned past its last row.
    #[error("column {path} has no row {row} (num_rows={len})")]
    RowOutOfBounds {
        /// Physical path of the reader, dot joined.
        path: String,
        /// Current row of the reader.
        row: usize,
        /// Number of rows in the column.
        len: usize,
    },
    /// The Parquet physical type has no counterpart in [`PhysicalType`].
    #[error("unsupported parquet physical type: {0}")]
    UnsupportedPhysicalType(parquet::basic::Type),
    /// Arrow failure while evaluating or materializing a batch.
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
}
