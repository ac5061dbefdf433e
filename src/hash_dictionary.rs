//! HashDictionary: unordered store on `hashbrown::HashMap` with a
//! caller-chosen hasher.

use crate::dictionary::Dictionary;
use crate::not_found::NotFoundError;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::{Entry, HashMap};
use std::collections::hash_map::RandomState;

#[derive(Clone)]
pub struct HashDictionary<K, V, S = RandomState> {
    map: HashMap<K, V, S>,
}

impl<K, V> HashDictionary<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for HashDictionary<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashDictionary<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: HashMap::with_hasher(hasher),
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
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(q)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(q)
    }
}

impl<K, V, S> core::fmt::Debug for HashDictionary<K, V, S>
where
    K: core::fmt::Debug,
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K, V, S> Dictionary<K, V> for HashDictionary<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
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
                log::trace!("set skipped: key already present in HashDictionary");
            }
        }
    }

    fn is_set(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}
