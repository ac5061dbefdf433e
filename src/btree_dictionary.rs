//! BTreeDictionary: ordered store on `std::collections::BTreeMap`.

use crate::dictionary::Dictionary;
use crate::not_found::NotFoundError;
use core::borrow::Borrow;
use std::collections::btree_map::{BTreeMap, Entry};

#[derive(Debug, Clone)]
pub struct BTreeDictionary<K, V> {
    map: BTreeMap<K, V>,
}

impl<K, V> BTreeDictionary<K, V>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Borrowed lookup, e.g. a `&str` query against `String` keys.
    pub fn find<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.get(q)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(q)
    }
}

impl<K, V> Default for BTreeDictionary<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Dictionary<K, V> for BTreeDictionary<K, V>
where
    K: Ord + Clone,
{
    fn get(&self, key: &K) -> Result<&V, NotFoundError<K>> {
        self.map
            .get(key)
            .ok_or_else(|| NotFoundError::new(key.clone()))
    }

    fn set(&mut self, key: K, value: V) {
        match self.map.entry(key) {
            Entry::Vacant(v) => {
                v.insert(value);
            }
            Entry::Occupied(_) => {
                log::trace!("set skipped: key already present in BTreeDictionary");
            }
        }
    }

    fn is_set(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Invariant: A fresh dictionary has nothing set and `get` reports the queried key.
    #[test]
    fn fresh_dictionary_is_empty() {
        let d: BTreeDictionary<i32, String> = BTreeDictionary::new();
        assert!(d.is_empty());
        for k in [-1, 0, 7, i32::MAX] {
            assert!(!d.is_set(&k));
            assert_eq!(d.get(&k), Err(NotFoundError::new(k)));
        }
    }

    /// Invariant: After `set(k, v)`, `is_set(k)` holds and `get(k)` borrows `v`.
    #[test]
    fn set_then_get() {
        let mut d: BTreeDictionary<i32, String> = BTreeDictionary::new();
        d.set(5, "wow".to_string());
        assert!(d.is_set(&5));
        assert!(!d.is_set(&10));
        assert_eq!(d.get(&5).unwrap(), "wow");
        assert_eq!(d.len(), 1);
    }

    /// Invariant: A second `set` on a present key is a no-op; the first value stays
    /// and the rejected value is dropped.
    #[test]
    fn second_set_keeps_first_value() {
        let mut d: BTreeDictionary<String, i32> = BTreeDictionary::new();
        d.set("k".to_string(), 1);
        d.set("k".to_string(), 2);
        assert_eq!(d.get(&"k".to_string()), Ok(&1));
        assert_eq!(d.len(), 1);

        struct Tracked(Rc<Cell<usize>>);
        impl Drop for Tracked {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }
        let drops = Rc::new(Cell::new(0));
        let mut t: BTreeDictionary<i32, Tracked> = BTreeDictionary::new();
        t.set(1, Tracked(drops.clone()));
        t.set(1, Tracked(drops.clone()));
        assert_eq!(drops.get(), 1, "rejected value must be dropped");
        drop(t);
        assert_eq!(drops.get(), 2);
    }

    /// Invariant: Borrowed lookup agrees with `get`/`is_set` (store `String`,
    /// query with `&str`).
    #[test]
    fn borrowed_lookup_with_str() {
        let mut d: BTreeDictionary<String, i32> = BTreeDictionary::new();
        d.set("hello".to_string(), 1);
        d.set("hello".to_string(), 2);
        assert_eq!(d.find("hello"), Some(&1));
        assert!(d.contains_key("hello"));
        assert_eq!(d.find("world"), None);
        assert!(!d.contains_key("world"));
    }

    /// Invariant: `is_set` has no side effects on later lookups.
    #[test]
    fn is_set_is_pure() {
        let mut d: BTreeDictionary<i32, char> = BTreeDictionary::new();
        d.set(1, 'a');
        for _ in 0..10 {
            assert!(d.is_set(&1));
            assert!(!d.is_set(&2));
        }
        assert_eq!(d.get(&1), Ok(&'a'));
        assert!(d.get(&2).is_err());
        assert_eq!(d.len(), 1);
    }
}
