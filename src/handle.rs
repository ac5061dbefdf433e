//! DictionaryHandle: sole owner of at most one boxed dictionary.

use crate::dictionary::Dictionary;

/// Owns one `Dictionary` behind a box, or nothing.
///
/// The handle is move-only. The owned dictionary is dropped exactly once,
/// when the handle is dropped (including during unwinding) or when it is
/// handed out by `take`.
pub struct DictionaryHandle<K, V> {
    dict: Option<Box<dyn Dictionary<K, V>>>,
}

impl<K, V> DictionaryHandle<K, V> {
    /// Take ownership of a freshly built dictionary.
    pub fn new<D>(dict: D) -> Self
    where
        D: Dictionary<K, V> + 'static,
    {
        Self::from_box(Box::new(dict))
    }

    pub fn from_box(dict: Box<dyn Dictionary<K, V>>) -> Self {
        Self { dict: Some(dict) }
    }

    /// A handle that owns nothing.
    pub const fn empty() -> Self {
        Self { dict: None }
    }

    /// Whether the handle currently owns a dictionary.
    pub fn not_null(&self) -> bool {
        self.dict.is_some()
    }

    /// Mutable access to the owned dictionary; `None` for an empty handle.
    pub fn get_obj(&mut self) -> Option<&mut (dyn Dictionary<K, V> + 'static)> {
        self.dict.as_deref_mut()
    }

    /// Shared access to the owned dictionary; `None` for an empty handle.
    pub fn obj(&self) -> Option<&(dyn Dictionary<K, V> + 'static)> {
        self.dict.as_deref()
    }

    /// Move the owned dictionary out, leaving this handle empty.
    pub fn take(&mut self) -> Option<Box<dyn Dictionary<K, V>>> {
        self.dict.take()
    }
}

impl<K, V> Default for DictionaryHandle<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K, V> From<Box<dyn Dictionary<K, V>>> for DictionaryHandle<K, V> {
    fn from(dict: Box<dyn Dictionary<K, V>>) -> Self {
        Self::from_box(dict)
    }
}

impl<K, V> core::fmt::Debug for DictionaryHandle<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DictionaryHandle")
            .field("not_null", &self.not_null())
            .finish()
    }
}

impl<K, V> Drop for DictionaryHandle<K, V> {
    fn drop(&mut self) {
        if let Some(dict) = self.dict.take() {
            log::trace!("releasing dictionary owned by handle");
            drop(dict);
        }
    }
}
