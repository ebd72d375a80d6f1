//! Comparator strategies
//!
//! Three interchangeable scans over the labeled dataset, all producing the
//! same ordered identifier list. Strategy choice is a configuration
//! decision made by the caller; the engine never auto-selects.
//!
//! - `SetBased`: per-row normalize + membership test. O(n) scan with O(1)
//!   expected lookups, no allocation beyond the output.
//! - `Vectorized`: normalizes the whole label column in one bulk pass,
//!   then scans. Trades a transient key column for tighter loops on large
//!   inputs.
//! - `Chunked`: the vectorized pass applied per fixed-size batch, bounding
//!   the transient column to one batch at a time.

use super::normalize::canonical_key;
use super::reference::ReferenceSet;
use super::LabeledRecord;

/// Which comparator scan to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareStrategy {
    SetBased,
    Vectorized,
    Chunked { chunk_size: usize },
}

/// Collect identifiers of records whose canonical key is absent from the
/// reference set, preserving input order.
pub fn find_unique(
    records: &[LabeledRecord],
    reference: &ReferenceSet,
    strategy: CompareStrategy,
) -> Vec<i64> {
    match strategy {
        CompareStrategy::SetBased => find_unique_set(records, reference),
        CompareStrategy::Vectorized => find_unique_vectorized(records, reference),
        CompareStrategy::Chunked { chunk_size } => {
            find_unique_chunked(records, reference, chunk_size)
        }
    }
}

fn find_unique_set(records: &[LabeledRecord], reference: &ReferenceSet) -> Vec<i64> {
    let mut unique_ids = Vec::new();
    for record in records {
        let key = canonical_key(&record.label);
        if !reference.contains_key(&key) {
            unique_ids.push(record.id);
        }
    }
    unique_ids
}

fn find_unique_vectorized(records: &[LabeledRecord], reference: &ReferenceSet) -> Vec<i64> {
    // Bulk pass 1: normalize the entire label column
    let keys: Vec<String> = records
        .iter()
        .map(|record| canonical_key(&record.label))
        .collect();

    // Bulk pass 2: membership scan over the key column
    records
        .iter()
        .zip(keys.iter())
        .filter(|(_, key)| !reference.contains_key(key))
        .map(|(record, _)| record.id)
        .collect()
}

fn find_unique_chunked(
    records: &[LabeledRecord],
    reference: &ReferenceSet,
    chunk_size: usize,
) -> Vec<i64> {
    // chunk_size is validated at configuration load; guard anyway so a
    // caller slip cannot panic chunks()
    let chunk_size = chunk_size.max(1);

    let mut unique_ids = Vec::new();
    for chunk in records.chunks(chunk_size) {
        unique_ids.extend(find_unique_vectorized(chunk, reference));
    }
    unique_ids
}
