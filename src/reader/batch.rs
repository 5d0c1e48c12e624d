//! Column readers over in-memory Arrow record batches.

use std::cell::Cell;

use arrow::{
    array::{Array, ArrayRef, AsArray},
    buffer::NullBuffer,
    datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type},
    record_batch::RecordBatch,
};
use bytes::Bytes;
use parquet::schema::types::ColumnPath;

use super::{ColumnReader, PhysicalType};
use crate::{
    error::{FilterError, Result},
    observability::log_trace,
    path::display_path,
};

/// Physical type an Arrow leaf array is read as, if it has one.
pub(crate) fn physical_type_of(data_type: &DataType) -> Option<PhysicalType> {
    match data_type {
        DataType::Int32 => Some(PhysicalType::Int32),
        DataType::Int64 => Some(PhysicalType::Int64),
        DataType::Boolean => Some(PhysicalType::Boolean),
        DataType::Binary | DataType::LargeBinary | DataType::Utf8 | DataType::LargeUtf8 => {
            Some(PhysicalType::Binary)
        }
        DataType::FixedSizeBinary(_) => Some(PhysicalType::FixedLenByteArray),
        DataType::Float32 => Some(PhysicalType::Float),
        DataType::Float64 => Some(PhysicalType::Double),
        _ => None,
    }
}

/// Reads one Arrow leaf array row by row.
///
/// The cursor lives in a [`Cell`] so the scan loop can reposition the reader
/// while filters hold shared borrows of it. The reader is therefore `!Sync`.
#[derive(Debug, Clone)]
pub struct ArrowColumnReader {
    path: ColumnPath,
    physical_type: PhysicalType,
    array: ArrayRef,
    nulls: Option<NullBuffer>,
    row: Cell<usize>,
}

impl ArrowColumnReader {
    /// Wraps `array` as the column at `path`, positioned at row 0.
    pub fn try_new(path: ColumnPath, array: ArrayRef) -> Result<Self> {
        let physical_type = physical_type_of(array.data_type()).ok_or_else(|| {
            FilterError::InvalidArgument(format!(
                "column {} has arrow type {} with no physical counterpart",
                display_path(&path),
                array.data_type()
            ))
        })?;
        let nulls = array.nulls().cloned();
        Ok(Self::from_parts(path, physical_type, array, nulls))
    }

    fn from_parts(
        path: ColumnPath,
        physical_type: PhysicalType,
        array: ArrayRef,
        nulls: Option<NullBuffer>,
    ) -> Self {
        Self {
            path,
            physical_type,
            array,
            nulls,
            row: Cell::new(0),
        }
    }

    /// Moves the cursor to `row`.
    pub fn seek(&self, row: usize) {
        self.row.set(row);
    }

    /// Current cursor position.
    pub fn row(&self) -> usize {
        self.row.get()
    }

    /// Number of rows in the underlying array.
    pub fn num_rows(&self) -> usize {
        self.array.len()
    }

    fn position(&self, requested: PhysicalType) -> Result<usize> {
        let declared = self.physical_type;
        let readable = requested == declared
            || (requested == PhysicalType::Binary && declared.is_binary_like());
        if !readable {
            return Err(FilterError::ReaderTypeMismatch {
                path: display_path(&self.path),
                requested,
                declared,
            });
        }
        let row = self.row.get();
        if row >= self.array.len() {
            return Err(FilterError::RowOutOfBounds {
                path: display_path(&self.path),
                row,
                len: self.array.len(),
            });
        }
        if self.nulls.as_ref().is_some_and(|nulls| nulls.is_null(row)) {
            return Err(FilterError::NullValue {
                path: display_path(&self.path),
                row,
            });
        }
        Ok(row)
    }
}

impl ColumnReader for ArrowColumnReader {
    fn path(&self) -> &ColumnPath {
        &self.path
    }

    fn physical_type(&self) -> PhysicalType {
        self.physical_type
    }

    fn is_null(&self) -> bool {
        let row = self.row.get();
        row < self.array.len() && self.nulls.as_ref().is_some_and(|nulls| nulls.is_null(row))
    }

    fn get_integer(&self) -> Result<i32> {
        let row = self.position(PhysicalType::Int32)?;
        Ok(self.array.as_primitive::<Int32Type>().value(row))
    }

    fn get_long(&self) -> Result<i64> {
        let row = self.position(PhysicalType::Int64)?;
        Ok(self.array.as_primitive::<Int64Type>().value(row))
    }

    fn get_boolean(&self) -> Result<bool> {
        let row = self.position(PhysicalType::Boolean)?;
        Ok(self.array.as_boolean().value(row))
    }

    fn get_binary(&self) -> Result<Bytes> {
        let row = self.position(PhysicalType::Binary)?;
        let bytes = match self.array.data_type() {
            DataType::Binary => self.array.as_binary::<i32>().value(row),
            DataType::LargeBinary => self.array.as_binary::<i64>().value(row),
            DataType::Utf8 => self.array.as_string::<i32>().value(row).as_bytes(),
            DataType::LargeUtf8 => self.array.as_string::<i64>().value(row).as_bytes(),
            DataType::FixedSizeBinary(_) => self.array.as_fixed_size_binary().value(row),
            _ => {
                return Err(FilterError::ReaderTypeMismatch {
                    path: display_path(&self.path),
                    requested: PhysicalType::Binary,
                    declared: self.physical_type,
                })
            }
        };
        Ok(Bytes::copy_from_slice(bytes))
    }

    fn get_float(&self) -> Result<f32> {
        let row = self.position(PhysicalType::Float)?;
        Ok(self.array.as_primitive::<Float32Type>().value(row))
    }

    fn get_double(&self) -> Result<f64> {
        let row = self.position(PhysicalType::Double)?;
        Ok(self.array.as_primitive::<Float64Type>().value(row))
    }
}

/// Leaf column readers for every readable column of a record batch.
///
/// Struct columns are flattened, so field `b` nested in struct column `a` is
/// exposed with physical path `["a", "b"]`. A null struct row makes every leaf
/// beneath it null. Leaves whose Arrow type has no physical counterpart are
/// left out.
#[derive(Debug)]
pub struct BatchColumns {
    readers: Vec<ArrowColumnReader>,
    num_rows: usize,
}

impl BatchColumns {
    /// Builds readers for `batch`, all positioned at row 0.
    pub fn from_batch(batch: &RecordBatch) -> Self {
        let schema = batch.schema();
        let mut readers = Vec::with_capacity(batch.num_columns());
        let mut prefix = Vec::new();
        for (field, column) in schema.fields().iter().zip(batch.columns()) {
            flatten(&mut prefix, field.name(), column, None, &mut readers);
        }
        Self {
            readers,
            num_rows: batch.num_rows(),
        }
    }

    /// Readers in schema order (depth first through structs).
    pub fn readers(&self) -> &[ArrowColumnReader] {
        &self.readers
    }

    /// Iterates readers in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, ArrowColumnReader> {
        self.readers.iter()
    }

    /// Positions every reader at `row`.
    pub fn seek(&self, row: usize) {
        for reader in &self.readers {
            reader.seek(row);
        }
    }

    /// Number of rows in the source batch.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of leaf readers.
    pub fn len(&self) -> usize {
        self.readers.len()
    }

    /// Whether no column of the batch could be read.
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }
}

impl<'a> IntoIterator for &'a BatchColumns {
    type Item = &'a ArrowColumnReader;
    type IntoIter = std::slice::Iter<'a, ArrowColumnReader>;

    fn into_iter(self) -> Self::IntoIter {
        self.readers.iter()
    }
}

fn flatten(
    prefix: &mut Vec<String>,
    name: &str,
    array: &ArrayRef,
    parent_nulls: Option<&NullBuffer>,
    out: &mut Vec<ArrowColumnReader>,
) {
    prefix.push(name.to_owned());
    let nulls = NullBuffer::union(parent_nulls, array.nulls());
    match array.data_type() {
        DataType::Struct(fields) => {
            let children = array.as_struct().columns();
            for (field, child) in fields.iter().zip(children) {
                flatten(prefix, field.name(), child, nulls.as_ref(), out);
            }
        }
        data_type => match physical_type_of(data_type) {
            Some(physical_type) => out.push(ArrowColumnReader::from_parts(
                ColumnPath::new(prefix.clone()),
                physical_type,
                ArrayRef::clone(array),
                nulls,
            )),
            None => log_trace!(
                component = "reader",
                event = "column_skipped",
                path = %prefix.join("."),
                data_type = %data_type,
            ),
        },
    }
    prefix.pop();
}
