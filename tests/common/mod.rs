//! Common test utilities for integration tests.

use std::sync::Arc;

use arrow::{
    array::{Array, ArrayRef, BooleanArray, FixedSizeBinaryArray, Int32Array, StringArray, StructArray},
    buffer::NullBuffer,
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};

/// Cars with a nested `engine` struct; the engine of the third car is unknown.
///
/// | model  | engine.capacity | engine.turbo | vin      |
/// |--------|-----------------|--------------|----------|
/// | fiesta | 1000            | true         | `aaaa`   |
/// | golf   | 1400            | false        | `bbbb`   |
/// | panda  | null            | null         | `cccc`   |
/// | supra  | 3000            | true         | `dddd`   |
pub fn cars() -> RecordBatch {
    let capacity: ArrayRef = Arc::new(Int32Array::from(vec![1000, 1400, 0, 3000]));
    let turbo: ArrayRef = Arc::new(BooleanArray::from(vec![true, false, false, true]));
    let engine = StructArray::try_new(
        vec![
            Field::new("capacity", DataType::Int32, false),
            Field::new("turbo", DataType::Boolean, false),
        ]
        .into(),
        vec![capacity, turbo],
        Some(NullBuffer::from(vec![true, true, false, true])),
    )
    .expect("engine struct should be valid");
    let vin = FixedSizeBinaryArray::try_from_iter(
        [b"aaaa", b"bbbb", b"cccc", b"dddd"].into_iter(),
    )
    .expect("vins share a width");

    let schema = Schema::new(vec![
        Field::new("model", DataType::Utf8, false),
        Field::new("engine", engine.data_type().clone(), true),
        Field::new("vin", DataType::FixedSizeBinary(4), false),
    ]);
    RecordBatch::try_new(
        Arc::new(schema),
        vec![
            Arc::new(StringArray::from(vec!["fiesta", "golf", "panda", "supra"])),
            Arc::new(engine),
            Arc::new(vin),
        ],
    )
    .expect("cars batch should be valid")
}

/// Models of `batch`, which must start with a `model` string column.
pub fn models(batch: &RecordBatch) -> Vec<String> {
    batch
        .column(0)
        .as_any()
        .downcast_ref::<StringArray>()
        .expect("model column is utf8")
        .iter()
        .map(|model| model.unwrap_or_default().to_string())
        .collect()
}
