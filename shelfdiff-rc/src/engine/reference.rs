//! Reference set construction
//!
//! The reference side of a comparison carries labels only (no identifiers),
//! so all the comparator needs from it is membership testing. Built fresh
//! for every `/process` invocation and dropped with the request.

use std::collections::HashSet;

use super::normalize::canonical_key;

/// Set of canonical keys derived from the reference dataset.
///
/// Duplicate labels collapse silently; only presence matters.
#[derive(Debug, Default)]
pub struct ReferenceSet {
    keys: HashSet<String>,
}

impl ReferenceSet {
    /// Build a reference set by normalizing every label in the input.
    pub fn build<I, S>(labels: I) -> ReferenceSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = labels
            .into_iter()
            .map(|label| canonical_key(label.as_ref()))
            .collect();
        ReferenceSet { keys }
    }

    /// O(1) expected-time membership test against an already-normalized key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct canonical keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set = ReferenceSet::build(["Song A", "song a", "  SONG A  ", "Song B"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains_key("song a"));
        assert!(set.contains_key("song b"));
    }

    #[test]
    fn membership_is_against_canonical_keys() {
        let set = ReferenceSet::build(["  Artist A -  Song X "]);
        assert!(set.contains_key("artist a - song x"));
        assert!(!set.contains_key("Artist A - Song X"));
    }

    #[test]
    fn empty_input_builds_empty_set() {
        let set = ReferenceSet::build(Vec::<String>::new());
        assert!(set.is_empty());
        assert!(!set.contains_key(""));
    }

    #[test]
    fn blank_labels_become_the_empty_key() {
        let set = ReferenceSet::build(["   "]);
        assert_eq!(set.len(), 1);
        assert!(set.contains_key(""));
    }
}
