//! Dictionary: a string-to-string layer over [`ChainedHashMap`] with bulk
//! update and strict erase.

use crate::chained_hash_map::{ChainedHashMap, Iter};
use crate::error::MapError;

/// A `String -> String` map built on [`ChainedHashMap`] by composition.
///
/// Two behaviors distinguish it from the underlying table:
/// - [`update`](Self::update) bulk-applies key-value pairs with overwrite
///   semantics (upsert), unlike the table's first-writer-wins `insert`.
/// - [`erase`](Self::erase) treats a missing key as an error,
///   [`MapError::InvalidKey`], instead of the table's `false` return.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    map: ChainedHashMap<String, String>,
}

impl Dictionary {
    /// An empty dictionary with the table's default capacity.
    pub fn new() -> Self {
        Self {
            map: ChainedHashMap::new(),
        }
    }

    /// Builds a dictionary from parallel key and value sequences; later
    /// duplicate keys overwrite earlier ones. Fails with
    /// [`MapError::LengthMismatch`] when the lengths differ.
    pub fn from_keys_and_values(keys: Vec<String>, values: Vec<String>) -> Result<Self, MapError> {
        Ok(Self {
            map: ChainedHashMap::from_keys_and_values(keys, values)?,
        })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Borrows the value under `key`, or [`MapError::KeyNotFound`].
    pub fn at(&self, key: &str) -> Result<&String, MapError> {
        self.map.at(key)
    }

    /// First-writer-wins insert; see [`ChainedHashMap::insert`].
    pub fn insert(&mut self, key: String, value: String) -> bool {
        self.map.insert(key, value)
    }

    /// Applies every pair in `entries` with upsert semantics: an existing
    /// key's value is overwritten, an absent key is inserted.
    pub fn update<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in entries {
            *self.map.entry_or_default(key) = value;
        }
    }

    /// Removes the entry under `key`. A missing key is an error here: the
    /// underlying table's boolean-false outcome is promoted to
    /// [`MapError::InvalidKey`] carrying the key.
    pub fn erase(&mut self, key: &str) -> Result<(), MapError> {
        if self.map.erase(key) {
            Ok(())
        } else {
            Err(MapError::InvalidKey(key.to_string()))
        }
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.map.iter()
    }

    /// Read-only access to the underlying table, for its accessors
    /// (`capacity`, `load_factor`, `bucket_size`, ...).
    pub fn as_map(&self) -> &ChainedHashMap<String, String> {
        &self.map
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.map.fmt(f)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
