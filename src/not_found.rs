use thiserror::Error;

/// Returned by `Dictionary::get` when the queried key has no value.
///
/// Holds the key itself, not a rendering of it, so callers can match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key {key:?} is not found in the dictionary")]
pub struct NotFoundError<K> {
    key: K,
}

impl<K> NotFoundError<K> {
    pub fn new(key: K) -> Self {
        Self { key }
    }

    /// The key that was looked up.
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }
}
