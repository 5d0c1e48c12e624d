//! Row-at-a-time scan over a record batch.

use arrow::{
    array::{BooleanArray, BooleanBuilder},
    compute,
    record_batch::RecordBatch,
};

use crate::{
    error::Result,
    filter::{MultiColumnPredicate, RecordFilter, UnboundFilter},
    observability::log_debug,
    reader::{ArrowColumnReader, BatchColumns},
};

/// Positions `columns` at every row in turn and records whether `filter` matches.
pub fn evaluate<F>(columns: &BatchColumns, filter: &F) -> BooleanArray
where
    F: RecordFilter + ?Sized,
{
    let mut mask = BooleanBuilder::with_capacity(columns.num_rows());
    for row in 0..columns.num_rows() {
        columns.seek(row);
        mask.append_value(filter.is_match());
    }
    let mask = mask.finish();
    log_debug!(
        component = "scan",
        event = "batch_evaluated",
        rows = mask.len(),
        matched = mask.true_count(),
    );
    mask
}

/// Binds `filter` against `batch` and returns the mask of matching rows.
pub fn match_mask<P>(batch: &RecordBatch, filter: &UnboundFilter<P>) -> Result<BooleanArray>
where
    P: MultiColumnPredicate<ArrowColumnReader>,
{
    let columns = BatchColumns::from_batch(batch);
    let bound = filter.bind(&columns)?;
    Ok(evaluate(&columns, &bound))
}

/// Returns the rows of `batch` matched by `filter`, in order.
pub fn filter_record_batch<P>(batch: &RecordBatch, filter: &UnboundFilter<P>) -> Result<RecordBatch>
where
    P: MultiColumnPredicate<ArrowColumnReader>,
{
    let mask = match_mask(batch, filter)?;
    Ok(compute::filter_record_batch(batch, &mask)?)
}

/// Returns the indices of the rows of `batch` matched by `filter`.
pub fn matching_rows<P>(batch: &RecordBatch, filter: &UnboundFilter<P>) -> Result<Vec<usize>>
where
    P: MultiColumnPredicate<ArrowColumnReader>,
{
    let mask = match_mask(batch, filter)?;
    Ok(mask
        .iter()
        .enumerate()
        .filter_map(|(row, matched)| matched.unwrap_or(false).then_some(row))
        .collect())
}
