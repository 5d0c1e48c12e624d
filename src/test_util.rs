//! Test-only column reader holding a single current value.

use std::cell::RefCell;

use bytes::Bytes;
use parquet::schema::types::ColumnPath;

use crate::{
    container::Value,
    error::{FilterError, Result},
    path::{display_path, parse_column_path},
    reader::{ColumnReader, PhysicalType},
};

/// Reader whose current value is set directly by the test.
#[derive(Debug)]
pub(crate) struct MockReader {
    path: ColumnPath,
    physical_type: PhysicalType,
    current: RefCell<Value>,
}

impl MockReader {
    pub(crate) fn new(path: &str, value: Value) -> Self {
        Self {
            path: parse_column_path(path, '.'),
            physical_type: value.physical_type(),
            current: RefCell::new(value),
        }
    }

    /// Stands in for the scan loop advancing the reader to the next row.
    pub(crate) fn advance(&self, value: Value) {
        assert_eq!(value.physical_type(), self.physical_type);
        *self.current.borrow_mut() = value;
    }

    fn mismatch(&self, requested: PhysicalType) -> FilterError {
        FilterError::ReaderTypeMismatch {
            path: display_path(&self.path),
            requested,
            declared: self.physical_type,
        }
    }
}

impl ColumnReader for MockReader {
    fn path(&self) -> &ColumnPath {
        &self.path
    }

    fn physical_type(&self) -> PhysicalType {
        self.physical_type
    }

    fn get_integer(&self) -> Result<i32> {
        match &*self.current.borrow() {
            Value::Int32(v) => Ok(*v),
            _ => Err(self.mismatch(PhysicalType::Int32)),
        }
    }

    fn get_long(&self) -> Result<i64> {
        match &*self.current.borrow() {
            Value::Int64(v) => Ok(*v),
            _ => Err(self.mismatch(PhysicalType::Int64)),
        }
    }

    fn get_boolean(&self) -> Result<bool> {
        match &*self.current.borrow() {
            Value::Boolean(v) => Ok(*v),
            _ => Err(self.mismatch(PhysicalType::Boolean)),
        }
    }

    fn get_binary(&self) -> Result<Bytes> {
        match &*self.current.borrow() {
            Value::Binary(v) | Value::FixedLenByteArray(v) => Ok(v.clone()),
            _ => Err(self.mismatch(PhysicalType::Binary)),
        }
    }

    fn get_float(&self) -> Result<f32> {
        match &*self.current.borrow() {
            Value::Float(v) => Ok(*v),
            _ => Err(self.mismatch(PhysicalType::Float)),
        }
    }

    fn get_double(&self) -> Result<f64> {
        match &*self.current.borrow() {
            Value::Double(v) => Ok(*v),
            _ => Err(self.mismatch(PhysicalType::Double)),
        }
    }
}
