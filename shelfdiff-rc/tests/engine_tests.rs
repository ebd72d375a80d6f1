//! Integration tests for the comparison engine
//!
//! Exercises the public engine API end to end: normalization, reference
//! set construction, all three comparator strategies, and result assembly.

use shelfdiff_rc::engine::{
    canonical_key, find_unique, reconcile, CompareStrategy, LabeledRecord, ReferenceSet,
};

fn records(pairs: &[(i64, &str)]) -> Vec<LabeledRecord> {
    pairs
        .iter()
        .map(|(id, label)| LabeledRecord {
            id: *id,
            label: label.to_string(),
        })
        .collect()
}

/// Deterministic pseudo-random dataset, large enough that chunk
/// boundaries fall in the middle of runs of matches and misses.
fn generated_dataset() -> (Vec<LabeledRecord>, Vec<String>) {
    let mut labeled = Vec::new();
    let mut reference = Vec::new();

    for i in 0..5_000i64 {
        let label = match i % 7 {
            0 => format!("Artist {} - Song {}", i % 31, i % 13),
            1 => format!("  ARTIST {} -  song {} ", i % 31, i % 13),
            2 => format!("Solo Act {}", i),
            3 => String::new(),
            _ => format!("Band {} - Track {}", i % 17, i % 11),
        };
        labeled.push(LabeledRecord { id: i, label });

        if i % 3 == 0 {
            reference.push(format!("artist {} - song {}", i % 31, i % 13));
        }
        if i % 5 == 0 {
            reference.push(format!("band {} - track {}", i % 17, i % 11));
        }
    }

    (labeled, reference)
}

#[test]
fn all_strategies_produce_identical_ordered_output() {
    let (labeled, reference_labels) = generated_dataset();
    let reference = ReferenceSet::build(&reference_labels);

    let set_based = find_unique(&labeled, &reference, CompareStrategy::SetBased);
    let vectorized = find_unique(&labeled, &reference, CompareStrategy::Vectorized);

    assert_eq!(set_based, vectorized);

    // Several chunk sizes, including ones that do not divide the input
    for chunk_size in [1, 2, 997, 5_000, 100_000] {
        let chunked = find_unique(
            &labeled,
            &reference,
            CompareStrategy::Chunked { chunk_size },
        );
        assert_eq!(
            chunked, set_based,
            "chunk_size {} changed the result",
            chunk_size
        );
    }
}

#[test]
fn output_preserves_first_occurrence_input_order() {
    let (labeled, reference_labels) = generated_dataset();
    let reference = ReferenceSet::build(&reference_labels);

    let unique = find_unique(&labeled, &reference, CompareStrategy::SetBased);

    let mut expected = Vec::new();
    for record in &labeled {
        if !reference.contains_key(&canonical_key(&record.label)) {
            expected.push(record.id);
        }
    }
    assert_eq!(unique, expected);

    // Ids ascend because the generated dataset assigns ascending ids
    assert!(unique.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn normalization_is_idempotent_over_the_dataset() {
    let (labeled, _) = generated_dataset();
    for record in labeled {
        let once = canonical_key(&record.label);
        assert_eq!(canonical_key(&once), once);
    }
}

#[test]
fn case_and_whitespace_variants_share_a_key() {
    let variants = ["Song Title", " song title ", "SONG   TITLE"];
    let keys: Vec<String> = variants.iter().map(|v| canonical_key(v)).collect();
    assert!(keys.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn scenario_one_matched_one_unique() {
    let labeled = records(&[(1, "Artist A - Song X"), (2, "Artist B - Song Y")]);
    let reference_labels = vec!["artist a - song x".to_string()];

    let result = reconcile(&labeled, &reference_labels, CompareStrategy::SetBased);
    assert_eq!(result.unique_ids, vec![2]);
    assert_eq!(result.unique_count, 1);
}

#[test]
fn scenario_duplicates_surface_independently() {
    let labeled = records(&[(1, "A"), (2, "A"), (3, "B")]);

    let result = reconcile(&labeled, &[], CompareStrategy::SetBased);
    assert_eq!(result.unique_ids, vec![1, 2, 3]);
    assert_eq!(result.unique_count, 3);
}

#[test]
fn scenario_chunked_five_records_three_unique() {
    let labeled = records(&[
        (1, "One"),
        (2, "Two"),
        (3, "Three"),
        (4, "Four"),
        (5, "Five"),
    ]);
    let reference_labels = vec!["two".to_string(), "four".to_string()];

    let chunked = reconcile(
        &labeled,
        &reference_labels,
        CompareStrategy::Chunked { chunk_size: 2 },
    );
    let unchunked = reconcile(&labeled, &reference_labels, CompareStrategy::SetBased);

    assert_eq!(chunked.unique_ids, unchunked.unique_ids);
    assert_eq!(chunked.unique_ids, vec![1, 3, 5]);
    assert_eq!(chunked.unique_count, 3);
}

#[test]
fn empty_labeled_input_is_empty_regardless_of_reference() {
    let reference_labels = vec!["anything".to_string()];
    for strategy in [
        CompareStrategy::SetBased,
        CompareStrategy::Vectorized,
        CompareStrategy::Chunked { chunk_size: 10 },
    ] {
        let result = reconcile(&[], &reference_labels, strategy);
        assert!(result.unique_ids.is_empty());
        assert_eq!(result.unique_count, 0);
    }
}

#[test]
fn count_always_matches_id_list_length() {
    let (labeled, reference_labels) = generated_dataset();
    for strategy in [
        CompareStrategy::SetBased,
        CompareStrategy::Vectorized,
        CompareStrategy::Chunked { chunk_size: 321 },
    ] {
        let result = reconcile(&labeled, &reference_labels, strategy);
        assert_eq!(result.unique_count, result.unique_ids.len());
        assert!(result.elapsed_seconds >= 0.0);
    }
}
