//! Column reader boundary consumed by filters.
//!
//! A [`ColumnReader`] is positioned at the current row by whoever drives the
//! scan. Filters only borrow readers and read their current value; they never
//! move the cursor.

mod batch;

use std::fmt;

use bytes::Bytes;
use parquet::{basic::Type, schema::types::ColumnPath};

pub use self::batch::{ArrowColumnReader, BatchColumns};
use crate::error::{FilterError, Result};

/// Primitive physical type a column reader declares for its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalType {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Boolean.
    Boolean,
    /// Variable length byte sequence; also the physical type of strings.
    Binary,
    /// 32-bit IEEE float.
    Float,
    /// 64-bit IEEE float.
    Double,
    /// Byte sequence whose width is fixed by the schema.
    FixedLenByteArray,
}

impl PhysicalType {
    /// Whether values of this type are byte sequences.
    #[must_use]
    pub fn is_binary_like(self) -> bool {
        matches!(self, PhysicalType::Binary | PhysicalType::FixedLenByteArray)
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhysicalType::Int32 => "INT32",
            PhysicalType::Int64 => "INT64",
            PhysicalType::Boolean => "BOOLEAN",
            PhysicalType::Binary => "BINARY",
            PhysicalType::Float => "FLOAT",
            PhysicalType::Double => "DOUBLE",
            PhysicalType::FixedLenByteArray => "FIXED_LEN_BYTE_ARRAY",
        };
        f.write_str(name)
    }
}

impl TryFrom<Type> for PhysicalType {
    type Error = FilterError;

    fn try_from(value: Type) -> Result<Self> {
        match value {
            Type::BOOLEAN => Ok(PhysicalType::Boolean),
            Type::INT32 => Ok(PhysicalType::Int32),
            Type::INT64 => Ok(PhysicalType::Int64),
            Type::FLOAT => Ok(PhysicalType::Float),
            Type::DOUBLE => Ok(PhysicalType::Double),
            Type::BYTE_ARRAY => Ok(PhysicalType::Binary),
            Type::FIXED_LEN_BYTE_ARRAY => Ok(PhysicalType::FixedLenByteArray),
            Type::INT96 => Err(FilterError::UnsupportedPhysicalType(value)),
        }
    }
}

impl From<PhysicalType> for Type {
    fn from(value: PhysicalType) -> Self {
        match value {
            PhysicalType::Boolean => Type::BOOLEAN,
            PhysicalType::Int32 => Type::INT32,
            PhysicalType::Int64 => Type::INT64,
            PhysicalType::Float => Type::FLOAT,
            PhysicalType::Double => Type::DOUBLE,
            PhysicalType::Binary => Type::BYTE_ARRAY,
            PhysicalType::FixedLenByteArray => Type::FIXED_LEN_BYTE_ARRAY,
        }
    }
}

/// A stream of values for one physical column, positioned at the current row.
///
/// Each typed accessor is only valid when [`ColumnReader::physical_type`]
/// matches it; implementations report a mismatch as
/// [`FilterError::ReaderTypeMismatch`]. `FixedLenByteArray` columns are read
/// through [`ColumnReader::get_binary`].
pub trait ColumnReader {
    /// Physical path of the column inside the schema.
    fn path(&self) -> &ColumnPath;

    /// Declared physical type of the column's values.
    fn physical_type(&self) -> PhysicalType;

    /// Whether the current value is null.
    fn is_null(&self) -> bool {
        false
    }

    /// Current value as a 32-bit integer.
    fn get_integer(&self) -> Result<i32>;

    /// Current value as a 64-bit integer.
    fn get_long(&self) -> Result<i64>;

    /// Current value as a boolean.
    fn get_boolean(&self) -> Result<bool>;

    /// Current value as bytes.
    fn get_binary(&self) -> Result<Bytes>;

    /// Current value as a 32-bit float.
    fn get_float(&self) -> Result<f32>;

    /// Current value as a 64-bit float.
    fn get_double(&self) -> Result<f64>;
}

impl<R: ColumnReader + ?Sized> ColumnReader for &R {
    fn path(&self) -> &ColumnPath {
        (**self).path()
    }

    fn physical_type(&self) -> PhysicalType {
        (**self).physical_type()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn get_integer(&self) -> Result<i32> {
        (**self).get_integer()
    }

    fn get_long(&self) -> Result<i64> {
        (**self).get_long()
    }

    fn get_boolean(&self) -> Result<bool> {
        (**self).get_boolean()
    }

    fn get_binary(&self) -> Result<Bytes> {
        (**self).get_binary()
    }

    fn get_float(&self) -> Result<f32> {
        (**self).get_float()
    }

    fn get_double(&self) -> Result<f64> {
        (**self).get_double()
    }
}
