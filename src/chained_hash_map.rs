//! ChainedHashMap: separate-chaining storage with load-factor-driven resizing.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;
use std::collections::hash_map::RandomState;
use std::fmt;

use crate::error::MapError;

/// Bucket count of a freshly constructed map.
pub const DEFAULT_CAPACITY: usize = 16;

/// Load factor above which an insert doubles the bucket array.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Load factor below which an erase halves the bucket array.
pub const MIN_LOAD_FACTOR: f64 = 0.25;

/// A hash map resolving collisions by chaining: each of the `capacity`
/// buckets is an ordered `Vec` of key-value pairs, and a key's bucket is
/// `hash & (capacity - 1)`. Capacity is always a power of two, starting at
/// [`DEFAULT_CAPACITY`], doubling when an insert pushes the load factor
/// above [`MAX_LOAD_FACTOR`] and halving when an erase drops it below
/// [`MIN_LOAD_FACTOR`]. Erasing the last entry collapses capacity to 1
/// rather than halving.
///
/// `insert` is first-writer-wins; the upsert path is
/// [`entry_or_default`](Self::entry_or_default). Fallible read paths
/// (`at`, `bucket_size`, `bucket_index`) return
/// [`MapError::KeyNotFound`] rather than inserting or panicking.
///
/// Iteration visits all of bucket 0's entries, then bucket 1's, and so on;
/// order within a bucket is insertion order, and no other ordering is
/// guaranteed. Any structural mutation (insert, erase, rehash) moves
/// entries between buckets, so iterators borrow the map and the borrow
/// checker rejects use of an iterator across a mutation.
pub struct ChainedHashMap<K, V, S = RandomState> {
    buckets: Vec<Vec<(K, V)>>,
    size: usize,
    hasher: S,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    /// An empty map with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Builds a map from parallel key and value sequences, applied in order
    /// with upsert semantics: a key appearing more than once keeps the value
    /// paired with its last occurrence.
    ///
    /// Fails with [`MapError::LengthMismatch`] when the sequences differ in
    /// length; no partial table is produced.
    pub fn from_keys_and_values(keys: Vec<K>, values: Vec<V>) -> Result<Self, MapError>
    where
        V: Default,
    {
        if keys.len() != values.len() {
            return Err(MapError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        let mut map = Self::new();
        for (key, value) in keys.into_iter().zip(values) {
            *map.entry_or_default(key) = value;
        }
        Ok(map)
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// An empty map with [`DEFAULT_CAPACITY`] buckets, hashing keys with
    /// `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            buckets: Self::empty_buckets(DEFAULT_CAPACITY),
            size: 0,
            hasher,
        }
    }

    fn empty_buckets(capacity: usize) -> Vec<Vec<(K, V)>> {
        debug_assert!(capacity >= 1 && capacity.is_power_of_two());
        (0..capacity).map(|_| Vec::new()).collect()
    }

    /// Bucket index for `key` under the current capacity. Recomputed on
    /// every use so a rehash transparently redirects lookups.
    fn bucket_of<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(key) as usize & (self.buckets.len() - 1)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of buckets. Always a power of two, at least 1.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// `len() / capacity()`; the quantity driving automatic resizing.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether an entry exists under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_of(key);
        self.buckets[idx].iter().any(|(k, _)| k.borrow() == key)
    }

    /// Borrows the value stored under `key`, or [`MapError::KeyNotFound`].
    pub fn at<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_of(key);
        self.buckets[idx]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
            .ok_or(MapError::KeyNotFound)
    }

    /// Mutably borrows the value stored under `key`, or
    /// [`MapError::KeyNotFound`]. Unlike
    /// [`entry_or_default`](Self::entry_or_default), absence is an error,
    /// never an insertion.
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, MapError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_of(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
            .ok_or(MapError::KeyNotFound)
    }

    /// Size of the bucket holding `key`, or [`MapError::KeyNotFound`] when
    /// the key is absent.
    pub fn bucket_size<Q>(&self, key: &Q) -> Result<usize, MapError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.bucket_index(key).map(|idx| self.buckets[idx].len())
    }

    /// Index of the bucket holding `key`, or [`MapError::KeyNotFound`] when
    /// the key is absent.
    pub fn bucket_index<Q>(&self, key: &Q) -> Result<usize, MapError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if self.contains_key(key) {
            Ok(self.bucket_of(key))
        } else {
            Err(MapError::KeyNotFound)
        }
    }

    /// Inserts `key -> value` if the key is absent and returns `true`;
    /// returns `false` with no mutation when the key already exists
    /// (first-writer-wins, not an upsert).
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        let idx = self.bucket_of(&key);
        self.buckets[idx].push((key, value));
        self.size += 1;
        self.grow_if_needed();
        true
    }

    /// The mutating index operator: borrows the value under `key`, inserting
    /// `V::default()` first when the key is absent. The only read path that
    /// mutates; assignment idioms (`*map.entry_or_default(k) = v`) rely on
    /// its insert-on-absence behavior.
    pub fn entry_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        // The grow check must run before the returned borrow is formed, so
        // on the vacant path the resize happens ahead of the push. The
        // trigger condition is identical either side of the insertion.
        let idx = self.bucket_of(&key);
        match self.buckets[idx].iter().position(|(k, _)| *k == key) {
            Some(slot) => &mut self.buckets[idx][slot].1,
            None => {
                if (self.size + 1) as f64 / self.buckets.len() as f64 > MAX_LOAD_FACTOR {
                    let doubled = self.buckets.len() * 2;
                    self.rehash(doubled);
                }
                let idx = self.bucket_of(&key);
                self.size += 1;
                let bucket = &mut self.buckets[idx];
                bucket.push((key, V::default()));
                let last = bucket.len() - 1;
                &mut bucket[last].1
            }
        }
    }

    /// Removes the entry under `key` and returns `true`; returns `false`
    /// with no mutation when the key is absent. Removal preserves the order
    /// of the bucket's remaining entries.
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_of(key);
        match self.buckets[idx].iter().position(|(k, _)| k.borrow() == key) {
            Some(slot) => {
                self.buckets[idx].remove(slot);
                self.size -= 1;
                self.shrink_if_needed();
                true
            }
            None => false,
        }
    }

    /// Drops every entry. Size becomes 0; capacity is left unchanged (only
    /// erase collapses capacity).
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }

    /// Read-only forward traversal in bucket order: every entry of bucket 0,
    /// then bucket 1, and so on.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.buckets, self.size)
    }

    fn grow_if_needed(&mut self) {
        if self.load_factor() > MAX_LOAD_FACTOR {
            let doubled = self.buckets.len() * 2;
            self.rehash(doubled);
        }
    }

    fn shrink_if_needed(&mut self) {
        if self.size == 0 {
            // Erasing the last entry collapses storage to a single bucket,
            // a special case distinct from the general halving rule.
            log::trace!(
                "collapsing capacity {} -> 1 on last erase",
                self.buckets.len()
            );
            self.buckets = Self::empty_buckets(1);
        } else if self.load_factor() < MIN_LOAD_FACTOR {
            let halved = (self.buckets.len() / 2).max(1);
            self.rehash(halved);
        }
    }

    /// Rebuilds the bucket array at `new_capacity`, re-inserting every entry
    /// under its index recomputed from the new capacity.
    fn rehash(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= 1 && new_capacity.is_power_of_two());
        log::debug!(
            "rehash: capacity {} -> {}, {} entries",
            self.buckets.len(),
            new_capacity,
            self.size
        );
        let old = mem::replace(&mut self.buckets, Self::empty_buckets(new_capacity));
        for (key, value) in old.into_iter().flatten() {
            let idx = self.bucket_of(&key);
            self.buckets[idx].push((key, value));
        }
    }
}

impl<K, V, S> Clone for ChainedHashMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    /// Deep copy: every bucket and entry is cloned, capacity carries over.
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            size: self.size,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, S> PartialEq for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    /// Structural equality: equal sizes and, for every key in one map, an
    /// equal value under that key in the other. Capacity, bucket layout,
    /// and insertion order are irrelevant.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && other
                .iter()
                .all(|(key, value)| self.at(key).map_or(false, |mine| mine == value))
    }
}

impl<K, V, S> Eq for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> fmt::Debug for ChainedHashMap<K, V, S>
where
    K: Eq + Hash + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Immutable iterator over a [`ChainedHashMap`].
///
/// The cursor is a `(bucket, slot)` pair into the borrowed bucket storage;
/// `bucket == buckets.len()` is the exhausted position. Construction seeks
/// to the first non-empty bucket; advancing walks the current bucket and
/// then seeks forward again.
pub struct Iter<'a, K, V> {
    buckets: &'a [Vec<(K, V)>],
    bucket: usize,
    slot: usize,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(buckets: &'a [Vec<(K, V)>], remaining: usize) -> Self {
        let mut it = Iter {
            buckets,
            bucket: 0,
            slot: 0,
            remaining,
        };
        it.seek_non_empty();
        it
    }

    fn seek_non_empty(&mut self) {
        while self.bucket < self.buckets.len() && self.buckets[self.bucket].is_empty() {
            self.bucket += 1;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.bucket == self.buckets.len() {
            return None;
        }
        // Copy the slice reference out so the yielded borrows carry the
        // map's lifetime, not this iterator's.
        let buckets: &'a [Vec<(K, V)>] = self.buckets;
        let (key, value) = &buckets[self.bucket][self.slot];
        self.slot += 1;
        if self.slot == self.buckets[self.bucket].len() {
            self.slot = 0;
            self.bucket += 1;
            self.seek_non_empty();
        }
        self.remaining -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
