//! Label normalization
//!
//! Two labels refer to the same item exactly when their canonical keys are
//! equal, so everything downstream (reference set, comparator) depends on
//! this function being deterministic and idempotent.

/// Convert a raw label into its canonical comparison key.
///
/// Trims leading/trailing whitespace, folds to lowercase, and collapses
/// internal whitespace runs to a single space. Never fails; an empty or
/// all-whitespace label yields the empty key.
pub fn canonical_key(label: &str) -> String {
    let lowered = label.to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    for word in lowered.split_whitespace() {
        if !key.is_empty() {
            key.push(' ');
        }
        key.push_str(word);
    }
    key
}
