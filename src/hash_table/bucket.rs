use crate::{Entry, Equivalent};
use std::slice;

/// [`Bucket`] is the ordered sequence of entries chained at one slot of a
/// [`BucketArray`](super::bucket_array::BucketArray).
///
/// Entries are kept in insertion order; keys within a bucket are unique.
#[derive(Clone, Debug)]
pub struct Bucket<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Bucket<K, V> {
    /// Creates an empty [`Bucket`].
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries in the [`Bucket`].
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the position of the entry whose key is equivalent to `key`.
    #[inline]
    pub(crate) fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: Equivalent<K> + ?Sized,
    {
        self.entries.iter().position(|e| key.equivalent(e.key()))
    }

    /// Searches for an entry associated with the given key.
    #[inline]
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        Q: Equivalent<K> + ?Sized,
    {
        self.entries.iter().find(|e| key.equivalent(e.key()))
    }

    /// Searches for an entry associated with the given key for modification.
    #[inline]
    pub(crate) fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        Q: Equivalent<K> + ?Sized,
    {
        self.entries.iter_mut().find(|e| key.equivalent(e.key()))
    }

    /// Returns the entry at the given position for modification.
    #[inline]
    pub(crate) fn get_mut(&mut self, pos: usize) -> Option<&mut Entry<K, V>> {
        self.entries.get_mut(pos)
    }

    /// Appends an entry to the tail of the [`Bucket`].
    ///
    /// The caller must ensure that no entry with an equal key is present.
    #[inline]
    pub(crate) fn push(&mut self, entry: Entry<K, V>) {
        self.entries.push(entry);
    }

    /// Removes the entry at the given position, shifting the following entries to keep the
    /// insertion order.
    #[inline]
    pub(crate) fn remove(&mut self, pos: usize) -> Entry<K, V> {
        self.entries.remove(pos)
    }

    #[inline]
    pub(crate) fn iter(&self) -> slice::Iter<'_, Entry<K, V>> {
        self.entries.iter()
    }

    #[inline]
    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, Entry<K, V>> {
        self.entries.iter_mut()
    }

    #[inline]
    pub(crate) fn into_entries(self) -> Vec<Entry<K, V>> {
        self.entries
    }
}
