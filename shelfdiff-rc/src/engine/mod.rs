//! Comparison engine
//!
//! Takes two collections of text labels — one carrying integer identifiers,
//! one not — and determines which identifier-bearing labels have no match
//! in the other set. Everything here is pure and request-scoped: the
//! reference set and all intermediates are built per invocation and
//! dropped with it.

pub mod compare;
pub mod normalize;
pub mod reference;

pub use compare::{find_unique, CompareStrategy};
pub use normalize::canonical_key;
pub use reference::ReferenceSet;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One row of the identifier-bearing dataset.
///
/// Identifiers are assumed unique per record but not enforced; duplicates
/// flow through the comparator independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRecord {
    pub id: i64,
    pub label: String,
}

/// Outcome of one comparison run.
///
/// `unique_count` always equals `unique_ids.len()`; ids appear in
/// first-occurrence input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub unique_ids: Vec<i64>,
    pub unique_count: usize,
    pub elapsed_seconds: f64,
}

/// Package the comparator output into the response contract.
pub fn assemble(unique_ids: Vec<i64>, elapsed: Duration) -> ComparisonResult {
    ComparisonResult {
        unique_count: unique_ids.len(),
        unique_ids,
        elapsed_seconds: elapsed.as_secs_f64(),
    }
}

/// Run the full comparison: build the reference set from the labels-only
/// dataset, scan the labeled records with the selected strategy, and
/// assemble the timed result.
pub fn reconcile(
    records: &[LabeledRecord],
    reference_labels: &[String],
    strategy: CompareStrategy,
) -> ComparisonResult {
    let start = std::time::Instant::now();
    let reference = ReferenceSet::build(reference_labels);
    tracing::debug!(
        reference_keys = reference.len(),
        records = records.len(),
        ?strategy,
        "Reference set built, scanning labeled records"
    );
    let unique_ids = find_unique(records, &reference, strategy);
    assemble(unique_ids, start.elapsed())
}
