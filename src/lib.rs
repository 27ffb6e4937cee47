//! chained-hashmap: a separate-chaining hash map with load-factor-driven
//! resizing, plus a string-keyed dictionary layered on top.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the algorithmic core (hashing, chaining, rehashing, the
//!   bucket-ordered iterator) in one small layer, and build the
//!   domain-flavored surface on top of it by composition.
//! - Layers:
//!   - ChainedHashMap<K, V, S>: owns the bucket storage
//!     (`Vec<Vec<(K, V)>>`), the live-entry count, and the hasher; all
//!     hashing, collision resolution, and resize policy live here.
//!   - Dictionary: `String -> String` wrapper adding bulk `update`
//!     (upsert semantics) and a strict `erase` that reports a missing key
//!     as `MapError::InvalidKey` instead of `false`.
//!
//! Constraints
//! - Single-threaded: mutators take `&mut self`, readers `&self`; callers
//!   needing cross-thread access must serialize externally.
//! - Capacity is always a power of two (default 16), so bucket selection
//!   is `hash & (capacity - 1)`. It is recomputed from the current
//!   capacity on every use, never cached.
//! - Load-factor window: an insert that pushes `len/capacity` above 0.75
//!   doubles capacity; an erase that drops it below 0.25 halves capacity;
//!   erasing the last entry collapses capacity to 1. Every resize is a
//!   full rehash under the new capacity.
//! - `insert` is first-writer-wins; `entry_or_default` is the
//!   insert-or-borrow upsert path; `at`/`at_mut` fail closed with
//!   `MapError::KeyNotFound` and never insert.
//!
//! Iterator contract
//! - Iteration yields all of bucket 0's entries, then bucket 1's, and so
//!   on; within a bucket, insertion order. No other ordering is promised.
//! - Any structural mutation (insert, erase, rehash) relocates entries,
//!   which would invalidate an outstanding cursor; iterators therefore
//!   borrow the map and the borrow checker rejects such use at compile
//!   time. No generation counter is needed.
//!
//! Notes and non-goals
//! - No thread-safety, persistence, custom allocators, or open-addressing
//!   strategy.
//! - Equality between maps is structural (same pairs), independent of
//!   capacity, bucket layout, and insertion order.
//! - The crate emits `log` records on rehashes and installs no logger.

pub mod chained_hash_map;
pub mod dictionary;
pub mod error;

// Public surface
pub use chained_hash_map::{
    ChainedHashMap, Iter, DEFAULT_CAPACITY, MAX_LOAD_FACTOR, MIN_LOAD_FACTOR,
};
pub use dictionary::Dictionary;
pub use error::MapError;
