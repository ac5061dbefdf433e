//! Dictionary: the capability set every store implements.

use crate::not_found::NotFoundError;

/// A key-value store with insert-if-absent writes.
///
/// The trait is object safe; `DictionaryHandle` stores implementations as
/// `Box<dyn Dictionary<K, V>>`.
pub trait Dictionary<K, V> {
    /// Borrow the value stored under `key`.
    ///
    /// Returns `NotFoundError` carrying a copy of `key` when it is absent.
    fn get(&self, key: &K) -> Result<&V, NotFoundError<K>>;

    /// Associate `value` with `key` unless `key` already has a value.
    ///
    /// An existing entry is left untouched and `value` is dropped.
    fn set(&mut self, key: K, value: V);

    /// Whether `key` currently has a value. Never mutates.
    fn is_set(&self, key: &K) -> bool;
}
