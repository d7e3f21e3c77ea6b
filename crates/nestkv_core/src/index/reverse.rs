//! Reverse value index.

use crate::error::{CoreError, CoreResult};
use crate::types::Value;
use std::collections::{HashMap, HashSet};

/// Value-to-keys index for O(1) "how many keys hold V" queries.
///
/// Each indexed value maps to the set of key names currently bound to it. A value whose set becomes empty is dropped from the index, so
/// `value_count` only counts values that are actually held by some key.
///
/// Empty values are never indexed.
///
/// # Example
///
/// ```rust
/// use nestkv_core::{ReverseIndex, Value};
///
/// let mut index = ReverseIndex::new();
/// index.record("a", &Value::from("10"));
/// index.record("b", &Value::from("10"));
/// assert_eq!(index.count("10"), 2);
///
/// index.clear("a", &Value::from("10"));
/// assert_eq!(index.count("10"), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseIndex {
    /// Value to key names mapping.
    buckets: HashMap<Value, HashSet<String>>,
    /// Total number of (value, key) pairs across all buckets.
    bindings: usize,
}

impl ReverseIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` to the bucket for `value`.
    ///
    /// Returns true if the name was newly added. Empty values are ignored.
    pub fn record(&mut self, name: &str, value: &Value) -> bool {
        if value.is_empty() {
            return false;
        }

        let set = self.buckets.entry(value.clone()).or_default();
        if set.insert(name.to_owned()) {
            self.bindings += 1;
            true
        } else {
            false
        }
    }

    /// Removes `name` from the bucket for `previous`.
    ///
    /// The bucket is deleted once it holds no names. Returns true if the
    /// name was present.
    pub fn clear(&mut self, name: &str, previous: &Value) -> bool {
        let Some(set) = self.buckets.get_mut(previous.as_str()) else {
            return false;
        };
        if !set.remove(name) {
            return false;
        }

        self.bindings -= 1;
        if set.is_empty() {
            self.buckets.remove(previous.as_str());
        }
        true
    }

    /// Returns the number of keys bound to `value`.
    #[must_use]
    pub fn count(&self, value: &str) -> usize {
        self.buckets.get(value).map_or(0, HashSet::len)
    }

    /// Returns the key names bound to `value`, in no particular order.
    pub fn keys_for<'a>(&'a self, value: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.buckets
            .get(value)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Returns every bucket as a value and its bound key names.
    pub fn buckets(&self) -> impl Iterator<Item = (&Value, &HashSet<String>)> + '_ {
        self.buckets.iter()
    }

    /// Checks if any key is bound to `value`.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.buckets.contains_key(value)
    }

    /// Returns the number of distinct values held by at least one key.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the total number of indexed (value, key) pairs.
    #[must_use]
    pub fn total_bindings(&self) -> usize {
        self.bindings
    }

    /// Returns true if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Verifies that this index describes exactly `mapping`.
    ///
    /// Every bound key must sit in its value's bucket and nowhere else, and
    /// no bucket may be empty.
    pub fn verify_against(&self, mapping: &HashMap<String, Value>) -> CoreResult<()> {
        for (name, value) in mapping {
            if value.is_empty() {
                return Err(CoreError::index_inconsistent(
                    name.as_str(),
                    "empty value stored in mapping",
                ));
            }
            let present = self
                .buckets
                .get(value.as_str())
                .is_some_and(|set| set.contains(name.as_str()));
            if !present {
                return Err(CoreError::index_inconsistent(
                    name.as_str(),
                    format!("missing from bucket {value:?}"),
                ));
            }
        }

        let mut seen = 0usize;
        for (value, set) in &self.buckets {
            if set.is_empty() {
                return Err(CoreError::index_inconsistent(
                    value.as_str(),
                    "empty bucket retained",
                ));
            }
            for name in set {
                if mapping.get(name.as_str()) != Some(value) {
                    return Err(CoreError::index_inconsistent(
                        name.as_str(),
                        format!("stale entry in bucket {value:?}"),
                    ));
                }
            }
            seen += set.len();
        }

        if seen != self.bindings {
            return Err(CoreError::index_inconsistent(
                "",
                format!("binding counter {} but {seen} entries", self.bindings),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Value {
        Value::from(s)
    }

    #[test]
    fn record_and_count() {
        let mut index = ReverseIndex::new();

        assert!(index.record("a", &v("10")));
        assert_eq!(index.count("10"), 1);
        assert_eq!(index.total_bindings(), 1);
    }

    #[test]
    fn count_missing() {
        let index = ReverseIndex::new();
        assert_eq!(index.count("missing"), 0);
        assert!(!index.contains("missing"));
    }

    #[test]
    fn record_is_idempotent() {
        let mut index = ReverseIndex::new();

        assert!(index.record("a", &v("10")));
        assert!(!index.record("a", &v("10")));

        assert_eq!(index.count("10"), 1);
        assert_eq!(index.total_bindings(), 1);
    }

    #[test]
    fn empty_value_is_not_indexed() {
        let mut index = ReverseIndex::new();

        assert!(!index.record("a", &v("")));
        assert!(index.is_empty());
        assert_eq!(index.count(""), 0);
    }

    #[test]
    fn multiple_keys_same_value() {
        let mut index = ReverseIndex::new();
        index.record("b", &v("10"));
        index.record("a", &v("10"));

        let mut keys: Vec<_> = index.keys_for("10").collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn clear_drops_empty_bucket() {
        let mut index = ReverseIndex::new();
        index.record("a", &v("10"));

        assert!(index.clear("a", &v("10")));
        assert!(!index.contains("10"));
        assert_eq!(index.value_count(), 0);
        assert_eq!(index.total_bindings(), 0);
    }

    #[test]
    fn clear_one_of_many() {
        let mut index = ReverseIndex::new();
        index.record("a", &v("10"));
        index.record("b", &v("10"));

        index.clear("a", &v("10"));

        assert_eq!(index.count("10"), 1);
        assert_eq!(index.keys_for("10").collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn clear_unknown_is_noop() {
        let mut index = ReverseIndex::new();
        index.record("a", &v("10"));

        assert!(!index.clear("b", &v("10")));
        assert!(!index.clear("a", &v("20")));
        assert_eq!(index.count("10"), 1);
    }

    #[test]
    fn buckets_list_every_value() {
        let mut index = ReverseIndex::new();
        index.record("a", &v("x"));
        index.record("b", &v("x"));
        index.record("c", &v("y"));
        index.clear("c", &v("y"));

        let mut buckets: Vec<(String, usize)> = index
            .buckets()
            .map(|(value, keys)| (value.to_string(), keys.len()))
            .collect();
        buckets.sort_unstable();
        assert_eq!(buckets, vec![("x".to_string(), 2)]);
    }

    proptest::proptest! {
        #[test]
        fn bindings_match_bucket_sizes(
            ops in proptest::collection::vec((0u8..4, 0u8..3, proptest::bool::ANY), 0..64)
        ) {
            let mut index = ReverseIndex::new();
            for (name, value, insert) in ops {
                let name = format!("k{name}");
                let value = v(&format!("v{value}"));
                if insert {
                    index.record(&name, &value);
                } else {
                    index.clear(&name, &value);
                }
            }

            let sum: usize = ["v0", "v1", "v2"].iter().map(|val| index.count(val)).sum();
            proptest::prop_assert_eq!(sum, index.total_bindings());
            for val in ["v0", "v1", "v2"] {
                proptest::prop_assert_eq!(index.contains(val), index.count(val) > 0);
            }
        }
    }

    #[test]
    fn verify_detects_divergence() {
        let mut mapping = HashMap::new();
        mapping.insert("a".to_string(), v("10"));

        let mut index = ReverseIndex::new();
        assert!(index.verify_against(&mapping).is_err());

        index.record("a", &v("10"));
        assert!(index.verify_against(&mapping).is_ok());

        index.record("b", &v("10"));
        assert!(matches!(
            index.verify_against(&mapping),
            Err(CoreError::IndexInconsistent { .. })
        ));
    }
}
