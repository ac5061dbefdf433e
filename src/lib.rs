//! owned-dict: a small dictionary contract with map-backed stores that
//! never overwrite, a typed not-found error, and an owning handle.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the contract separate from its storage so callers can
//!   hold any store behind one owning handle and dispatch dynamically.
//! - Layers:
//!   - Dictionary<K, V>: object-safe trait with `get`, `set`, `is_set`.
//!   - BTreeDictionary<K, V>: ordered store on `BTreeMap`.
//!   - HashDictionary<K, V, S>: unordered store on `hashbrown::HashMap`
//!     with a pluggable `BuildHasher`.
//!   - DictionaryHandle<K, V>: owns at most one `Box<dyn Dictionary>`
//!     and releases it on drop.
//!
//! Constraints
//! - Single-threaded, synchronous. Nothing here locks; wrap a handle in a
//!   `Mutex` if it has to cross threads.
//! - `set` is insert-if-absent. A second `set` on a present key is a
//!   silent no-op and the first value is kept.
//! - `get` performs exactly one lookup and returns a borrow of the stored
//!   value, or a `NotFoundError` holding a clone of the queried key.
//! - No removal, no iteration, no resizing policy beyond the backing map.
//!
//! Handle access
//! - An empty handle is a valid state. `get_obj`/`obj` return `Option`,
//!   so there is no way to dereference a handle that owns nothing.
//! - Handles are move-only; `take` hands ownership to the caller and
//!   leaves the handle empty.
//!
//! Notes and non-goals
//! - The library returns errors and never logs them. The only log output
//!   is `trace!` for skipped sets and handle release.
//! - Keys must be `Clone` for `get` so the error can own the key.

mod btree_dictionary;
mod dictionary;
mod dictionary_proptest;
mod handle;
mod hash_dictionary;
mod not_found;

// Public surface
pub use btree_dictionary::BTreeDictionary;
pub use dictionary::Dictionary;
pub use handle::DictionaryHandle;
pub use hash_dictionary::HashDictionary;
pub use not_found::NotFoundError;
