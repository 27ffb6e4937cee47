//! Error taxonomy for the map and the dictionary layered on top of it.

use thiserror::Error;

/// Errors surfaced by the fallible read paths, sequence construction, and
/// the dictionary's strict erase.
///
/// The mutating upsert ([`ChainedHashMap::entry_or_default`]) never fails:
/// absence triggers creation instead. `insert`/`erase`/`contains_key` report
/// their "did it logically happen" outcome as a `bool` and never through
/// this type.
///
/// [`ChainedHashMap::entry_or_default`]: crate::ChainedHashMap::entry_or_default
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A read-only lookup (`at`, `at_mut`, `bucket_size`, `bucket_index`)
    /// found no entry under the requested key.
    #[error("key not found")]
    KeyNotFound,

    /// The key and value sequences handed to `from_keys_and_values` differ
    /// in length. No entries were inserted.
    #[error("key and value sequences differ in length ({keys} keys, {values} values)")]
    LengthMismatch { keys: usize, values: usize },

    /// `Dictionary::erase` was asked to remove a key that is not present.
    #[error("invalid key: {0:?}")]
    InvalidKey(String),
}
