mod common;

use std::thread;

use bytes::Bytes;
use record_filter::{
    columns, scan, ArrowColumnReader, BatchColumns, ColumnReader, FilterError, FilterOptions,
    PhysicalType, TypedValueContainer, UnboundFilter,
};

fn big_turbo(readers: &[&ArrowColumnReader]) -> bool {
    if readers.iter().any(|reader| reader.is_null()) {
        return false;
    }
    TypedValueContainer::load(readers, &[PhysicalType::Int32, PhysicalType::Boolean])
        .and_then(|row| Ok(row.get_int(0)? >= 1000 && row.get_boolean(1)?))
        .unwrap_or(false)
}

#[test]
fn nested_paths_resolve_to_struct_leaves() {
    let batch = common::cars();
    let filter = columns(["engine.capacity", "engine.turbo"], big_turbo);

    let filtered = scan::filter_record_batch(&batch, &filter).unwrap();
    assert_eq!(common::models(&filtered), vec!["fiesta", "supra"]);
}

#[test]
fn null_struct_rows_are_visible_to_predicates() {
    let batch = common::cars();
    let filter = columns(["engine.capacity"], |readers: &[&ArrowColumnReader]| {
        readers[0].is_null()
    });
    assert_eq!(scan::matching_rows(&batch, &filter).unwrap(), vec![2]);
}

#[test]
fn loading_a_null_value_fails_the_row() {
    let batch = common::cars();
    let columns_of_batch = BatchColumns::from_batch(&batch);
    let filter = columns(["model", "engine.capacity"], |_: &[&ArrowColumnReader]| true);
    let bound = filter.bind(&columns_of_batch).unwrap();

    columns_of_batch.seek(2);
    match TypedValueContainer::load_declared(bound.readers()) {
        Err(FilterError::NullValue { path, row }) => {
            assert_eq!(path, "engine.capacity");
            assert_eq!(row, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }

    columns_of_batch.seek(3);
    let row = TypedValueContainer::load_declared(bound.readers()).unwrap();
    assert_eq!(row.get_string(0).unwrap(), "supra");
    assert_eq!(row.get_int(1).unwrap(), 3000);
}

#[test]
fn fixed_width_column_reads_as_binary_only() {
    let batch = common::cars();
    let filter = columns(["vin"], |readers: &[&ArrowColumnReader]| {
        let row = TypedValueContainer::load_declared(readers).unwrap();
        assert!(matches!(
            row.get_string(0),
            Err(FilterError::TypeMismatch {
                expected: PhysicalType::Binary,
                actual: PhysicalType::FixedLenByteArray,
                index: 0,
            })
        ));
        row.get_binary(0).unwrap() == Bytes::from_static(b"bbbb")
    });
    assert_eq!(scan::matching_rows(&batch, &filter).unwrap(), vec![1]);
}

#[test]
fn struct_column_itself_is_not_a_leaf() {
    let batch = common::cars();
    let filter = columns(["engine"], |_: &[&ArrowColumnReader]| true);
    match scan::match_mask(&batch, &filter) {
        Err(FilterError::UnresolvedColumn { path }) => assert_eq!(path, "engine"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn evaluation_observes_scan_position() {
    let batch = common::cars();
    let columns_of_batch = BatchColumns::from_batch(&batch);
    let filter = columns(["model"], |readers: &[&ArrowColumnReader]| {
        readers[0].get_binary().unwrap().starts_with(b"g")
    });
    let bound = filter.bind(&columns_of_batch).unwrap();

    let observed: Vec<bool> = (0..columns_of_batch.num_rows())
        .map(|row| {
            columns_of_batch.seek(row);
            bound.is_match()
        })
        .collect();
    assert_eq!(observed, vec![false, true, false, false]);
    assert_eq!(bound.readers()[0].row(), 3);
}

#[test]
fn custom_delimiter_applies_to_scans() {
    let batch = common::cars();
    let filter = UnboundFilter::builder()
        .column("engine::capacity")
        .predicate(|readers: &[&ArrowColumnReader]| {
            readers[0].get_integer().map(|cc| cc > 2000).unwrap_or(false)
        })
        .options(FilterOptions::default().path_delimiter(':'))
        .build()
        .unwrap();
    // "::" yields an empty middle segment, which no column carries
    assert!(matches!(
        scan::match_mask(&batch, &filter),
        Err(FilterError::UnresolvedColumn { .. })
    ));

    let filter = UnboundFilter::builder()
        .column("engine:capacity")
        .predicate(|readers: &[&ArrowColumnReader]| {
            readers[0].get_integer().map(|cc| cc > 2000).unwrap_or(false)
        })
        .options(FilterOptions::default().path_delimiter(':'))
        .build()
        .unwrap();
    assert_eq!(scan::matching_rows(&batch, &filter).unwrap(), vec![3]);
}

#[test]
fn parallel_workers_bind_private_readers() {
    let batches = vec![common::cars(), common::cars().slice(1, 2)];
    let filter = columns(["engine.capacity", "engine.turbo"], big_turbo);
    let filter = &filter;

    let matches: Vec<Vec<usize>> = thread::scope(|scope| {
        let handles: Vec<_> = batches
            .iter()
            .map(|batch| scope.spawn(move || scan::matching_rows(batch, filter).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    assert_eq!(matches, vec![vec![0, 3], vec![]]);
}
