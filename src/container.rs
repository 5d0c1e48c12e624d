//! One-row snapshot of heterogeneous column values.
//!
//! Predicates that know their column types only at runtime load a
//! [`TypedValueContainer`] from the bound readers and read values back through
//! accessors that refuse to reinterpret a value as another physical type.
//! Predicates that know the types up front can `match` on [`Value`] directly.

use bytes::Bytes;

use crate::{
    error::{FilterError, Result},
    reader::{ColumnReader, PhysicalType},
};

/// A single column value tagged with the physical type it was read as.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// Boolean.
    Boolean(bool),
    /// Variable length bytes.
    Binary(Bytes),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// Fixed width bytes.
    FixedLenByteArray(Bytes),
}

impl Value {
    /// Reads the current value of `reader` as `physical_type`.
    pub fn read<R>(reader: &R, physical_type: PhysicalType) -> Result<Self>
    where
        R: ColumnReader + ?Sized,
    {
        Ok(match physical_type {
            PhysicalType::Int32 => Value::Int32(reader.get_integer()?),
            PhysicalType::Int64 => Value::Int64(reader.get_long()?),
            PhysicalType::Boolean => Value::Boolean(reader.get_boolean()?),
            PhysicalType::Binary => Value::Binary(reader.get_binary()?),
            PhysicalType::Float => Value::Float(reader.get_float()?),
            PhysicalType::Double => Value::Double(reader.get_double()?),
            PhysicalType::FixedLenByteArray => Value::FixedLenByteArray(reader.get_binary()?),
        })
    }

    /// Physical type carried by this value.
    #[must_use]
    pub fn physical_type(&self) -> PhysicalType {
        match self {
            Value::Int32(_) => PhysicalType::Int32,
            Value::Int64(_) => PhysicalType::Int64,
            Value::Boolean(_) => PhysicalType::Boolean,
            Value::Binary(_) => PhysicalType::Binary,
            Value::Float(_) => PhysicalType::Float,
            Value::Double(_) => PhysicalType::Double,
            Value::FixedLenByteArray(_) => PhysicalType::FixedLenByteArray,
        }
    }
}

/// Immutable, positionally indexed values read from a fixed set of readers.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedValueContainer {
    values: Box<[Value]>,
}

impl TypedValueContainer {
    /// Reads the current value of every reader, `readers[i]` as `types[i]`.
    ///
    /// Fails with [`FilterError::LengthMismatch`] when the slices differ in
    /// length, and with the reader's error if any value cannot be read. No
    /// container is produced unless every value was read.
    pub fn load<R>(readers: &[&R], types: &[PhysicalType]) -> Result<Self>
    where
        R: ColumnReader + ?Sized,
    {
        if readers.len() != types.len() {
            return Err(FilterError::LengthMismatch {
                readers: readers.len(),
                tags: types.len(),
            });
        }
        let values = readers
            .iter()
            .zip(types)
            .map(|(reader, physical_type)| Value::read(*reader, *physical_type))
            .collect::<Result<Box<[Value]>>>()?;
        Ok(Self { values })
    }

    /// Like [`TypedValueContainer::load`], reading each reader as the type it declares.
    pub fn load_declared<R>(readers: &[&R]) -> Result<Self>
    where
        R: ColumnReader + ?Sized,
    {
        let types: Vec<PhysicalType> = readers.iter().map(|r| r.physical_type()).collect();
        Self::load(readers, &types)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the container holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the tagged values in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Borrows the tagged value at `i`.
    pub fn value(&self, i: usize) -> Result<&Value> {
        self.values.get(i).ok_or(FilterError::IndexOutOfBounds {
            index: i,
            len: self.values.len(),
        })
    }

    /// Physical type of the value at `i`.
    pub fn physical_type(&self, i: usize) -> Result<PhysicalType> {
        self.value(i).map(Value::physical_type)
    }

    /// Gets the `INT32` value at `i`.
    pub fn get_int(&self, i: usize) -> Result<i32> {
        match self.value(i)? {
            Value::Int32(v) => Ok(*v),
            other => Err(mismatch(PhysicalType::Int32, other, i)),
        }
    }

    /// Gets the `INT64` value at `i`.
    pub fn get_long(&self, i: usize) -> Result<i64> {
        match self.value(i)? {
            Value::Int64(v) => Ok(*v),
            other => Err(mismatch(PhysicalType::Int64, other, i)),
        }
    }

    /// Gets the `BOOLEAN` value at `i`.
    pub fn get_boolean(&self, i: usize) -> Result<bool> {
        match self.value(i)? {
            Value::Boolean(v) => Ok(*v),
            other => Err(mismatch(PhysicalType::Boolean, other, i)),
        }
    }

    /// Gets the bytes at `i`, stored as either `BINARY` or `FIXED_LEN_BYTE_ARRAY`.
    pub fn get_binary(&self, i: usize) -> Result<Bytes> {
        match self.value(i)? {
            Value::Binary(v) | Value::FixedLenByteArray(v) => Ok(v.clone()),
            other => Err(mismatch(PhysicalType::Binary, other, i)),
        }
    }

    /// Gets the `BINARY` value at `i` decoded as UTF-8.
    ///
    /// `FIXED_LEN_BYTE_ARRAY` values are refused even though
    /// [`TypedValueContainer::get_binary`] accepts them.
    pub fn get_string(&self, i: usize) -> Result<String> {
        match self.value(i)? {
            Value::Binary(v) => std::str::from_utf8(v)
                .map(str::to_owned)
                .map_err(|_| FilterError::InvalidUtf8 { index: i }),
            other => Err(mismatch(PhysicalType::Binary, other, i)),
        }
    }

    /// Gets the `FLOAT` value at `i`.
    pub fn get_float(&self, i: usize) -> Result<f32> {
        match self.value(i)? {
            Value::Float(v) => Ok(*v),
            other => Err(mismatch(PhysicalType::Float, other, i)),
        }
    }

    /// Gets the `DOUBLE` value at `i`.
    pub fn get_double(&self, i: usize) -> Result<f64> {
        match self.value(i)? {
            Value::Double(v) => Ok(*v),
            other => Err(mismatch(PhysicalType::Double, other, i)),
        }
    }
}

impl<'a> IntoIterator for &'a TypedValueContainer {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

fn mismatch(expected: PhysicalType, actual: &Value, index: usize) -> FilterError {
    FilterError::TypeMismatch {
        expected,
        actual: actual.physical_type(),
        index,
    }
}
