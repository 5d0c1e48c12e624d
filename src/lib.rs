#![deny(missing_docs)]
//! Multi-column record filtering for columnar readers.
//!
//! A record filter decides whether the row a set of column readers is
//! positioned at matches a caller predicate, without materializing the row.
//! Filters are declared with logical, dot separated column paths
//! ([`filter::columns`]), bound once per scan to the physical readers
//! ([`filter::UnboundFilter::bind`]), and then asked per row
//! ([`filter::BoundFilter::is_match`]). Predicates read heterogeneous values
//! safely through [`container::TypedValueContainer`].
//!
//! ```
//! use std::sync::Arc;
//!
//! use arrow::{
//!     array::{Int32Array, StringArray},
//!     datatypes::{DataType, Field, Schema},
//!     record_batch::RecordBatch,
//! };
//! use record_filter::{columns, scan, ArrowColumnReader, TypedValueContainer};
//!
//! let schema = Schema::new(vec![
//!     Field::new("id", DataType::Int32, false),
//!     Field::new("name", DataType::Utf8, false),
//! ]);
//! let batch = RecordBatch::try_new(
//!     Arc::new(schema),
//!     vec![
//!         Arc::new(Int32Array::from(vec![5, 6])),
//!         Arc::new(StringArray::from(vec!["abc", "def"])),
//!     ],
//! )
//! .unwrap();
//!
//! let filter = columns(["id", "name"], |readers: &[&ArrowColumnReader]| {
//!     TypedValueContainer::load_declared(readers)
//!         .and_then(|row| Ok(row.get_int(0)? == 5 && row.get_string(1)? == "abc"))
//!         .unwrap_or(false)
//! });
//! assert_eq!(scan::matching_rows(&batch, &filter).unwrap(), vec![0]);
//! ```

pub mod container;
mod error;
pub mod filter;
mod observability;
mod option;
pub mod path;
pub mod precondition;
pub mod reader;
pub mod scan;

#[cfg(test)]
mod test_util;

pub use parquet::schema::types::ColumnPath;

pub use crate::{
    container::{TypedValueContainer, Value},
    error::{FilterError, Result},
    filter::{
        columns, BoundFilter, MultiColumnPredicate, RecordFilter, UnboundFilter,
        UnboundFilterBuilder,
    },
    option::FilterOptions,
    reader::{ArrowColumnReader, BatchColumns, ColumnReader, PhysicalType},
};
