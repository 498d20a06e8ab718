//! Object (map) payload type.

use core::fmt::{self, Debug, Formatter};
use core::iter::FromIterator;
use core::mem;
use core::ops::Index;
use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::{FString, Field};

/// An object field payload.
///
/// `FObject` maps unique string keys to [`Field`]s. Iteration follows the
/// lexicographic order of the keys, not insertion order.
#[derive(Default, PartialEq)]
pub struct FObject(BTreeMap<FString, Field>);

/// Iterator over `(key, value)` pairs of an object.
pub type Iter<'a> = btree_map::Iter<'a, FString, Field>;

impl FObject {
    /// Creates a new empty object.
    #[must_use]
    pub const fn new() -> Self {
        FObject(BTreeMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the object is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.0.get(key)
    }

    /// Gets a mutable value by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the object contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts a key-value pair, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<FString>, value: impl Into<Field>) -> Option<Field> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Field> {
        self.0.remove(key)
    }

    /// Removes a key, returning the stored key and its value.
    pub fn remove_entry(&mut self, key: &str) -> Option<(FString, Field)> {
        self.0.remove_entry(key)
    }

    /// Clears the object.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &FString> {
        self.0.keys()
    }

    /// Iterates over values in key order.
    pub fn values(&self) -> impl Iterator<Item = &Field> {
        self.0.values()
    }

    /// Iterates over mutable values in key order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.0.values_mut()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> Iter<'_> {
        self.0.iter()
    }

    /// Moves every value out, leaving the object empty.
    pub(crate) fn take_values(&mut self) -> impl Iterator<Item = Field> {
        mem::take(&mut self.0).into_values()
    }
}

// === Iterator ===

impl IntoIterator for FObject {
    type Item = (FString, Field);
    type IntoIter = btree_map::IntoIter<FString, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FObject {
    type Item = (&'a FString, &'a Field);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// === Index ===

impl Index<&str> for FObject {
    type Output = Field;

    fn index(&self, key: &str) -> &Field {
        self.get(key).expect("key not found")
    }
}

impl Debug for FObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

// === FromIterator / Extend ===

impl<K: Into<FString>, V: Into<Field>> FromIterator<(K, V)> for FObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FObject(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<FString>, V: Into<Field>> Extend<(K, V)> for FObject {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<FString>, V: Into<Field>> From<BTreeMap<K, V>> for FObject {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}
