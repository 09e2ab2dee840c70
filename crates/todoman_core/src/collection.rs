//! Ordered, identity-unique container shared by every aggregate.
//!
//! # Responsibility
//! - Hold child elements (todos, notes, efforts, index items) in insertion order.
//! - Enforce at-most-one element per identity key.
//!
//! # Invariants
//! - No two elements share a key.
//! - Insertion order is preserved and is the iteration order.
//! - `add` of an existing key is a no-op (first write wins).
//! - Missing keys in `remove`/`has`/`find` are not errors.
//!
//! Lookups are linear scans over the backing `Vec`.

use crate::identity::{EntityId, Identified};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Formatter};

/// Insertion-ordered collection keyed by an identity extractor.
///
/// The extractor is fixed at construction. `new()` uses [`Identified::id`];
/// `with_key` accepts any function returning a comparable key.
///
/// Uniqueness is checked on `add` only. Mutable access is therefore limited
/// to identity-keyed collections, whose elements keep their id fixed.
pub struct OrderedUniqueCollection<T, K = EntityId> {
    items: Vec<T>,
    key_of: fn(&T) -> K,
}

impl<T: Identified> OrderedUniqueCollection<T> {
    /// Creates an empty collection keyed by each element's `EntityId`.
    pub fn new() -> Self {
        Self::with_key(<T as Identified>::id)
    }

    /// Mutable lookup by id.
    pub fn find_mut(&mut self, id: &EntityId) -> Option<&mut T> {
        let key_of = self.key_of;
        self.items.iter_mut().find(|item| key_of(item) == *id)
    }
}

impl<T: Identified> Default for OrderedUniqueCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: PartialEq> OrderedUniqueCollection<T, K> {
    /// Creates an empty collection keyed by `key_of`.
    pub fn with_key(key_of: fn(&T) -> K) -> Self {
        Self {
            items: Vec::new(),
            key_of,
        }
    }

    /// Appends `item` unless an element with the same key is already present.
    ///
    /// Returns `true` when the item was inserted.
    pub fn add(&mut self, item: T) -> bool {
        let key = (self.key_of)(&item);
        if self.has(&key) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Detaches and returns the element with `key`, if any.
    ///
    /// The element itself is handed back to the caller; only the membership
    /// link is severed.
    pub fn remove(&mut self, key: &K) -> Option<T> {
        let position = self.position(key)?;
        Some(self.items.remove(position))
    }

    pub fn has(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn find(&self, key: &K) -> Option<&T> {
        self.items.iter().find(|item| (self.key_of)(item) == *key)
    }

    /// First element, in insertion order, matching `predicate`.
    pub fn find_by<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    /// Lazily yields every element matching `predicate`, in insertion order.
    pub fn filter<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a T> + 'a
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.items.iter().filter(move |item| predicate(item))
    }

    /// Keys of all members, in insertion order.
    pub fn keys<'a>(&'a self) -> impl Iterator<Item = K> + 'a
    where
        K: 'a,
    {
        self.items.iter().map(self.key_of)
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.items
            .iter()
            .position(|item| (self.key_of)(item) == *key)
    }
}

impl<T, K> OrderedUniqueCollection<T, K> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone, K> Clone for OrderedUniqueCollection<T, K> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            key_of: self.key_of,
        }
    }
}

impl<T: Debug, K> Debug for OrderedUniqueCollection<T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

// Equality is membership and order; the extractor is not compared.
impl<T: PartialEq, K> PartialEq for OrderedUniqueCollection<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, K> Eq for OrderedUniqueCollection<T, K> {}

impl<T, K: PartialEq> Extend<T> for OrderedUniqueCollection<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Identified> FromIterator<T> for OrderedUniqueCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<'a, T, K> IntoIterator for &'a OrderedUniqueCollection<T, K> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, K> IntoIterator for OrderedUniqueCollection<T, K> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Serialize, K> Serialize for OrderedUniqueCollection<T, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

/// Decodes an ordered sequence, dropping later duplicates of an id.
impl<'de, T> Deserialize<'de> for OrderedUniqueCollection<T>
where
    T: Identified + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
