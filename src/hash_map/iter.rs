//! Derived views over the entries of a [`HashMap`](super::HashMap).
//!
//! Every view walks the bucket array on demand; the number of remaining entries is known up
//! front, so all iterators are exact-size.

use crate::hash_table::bucket::Bucket;
use crate::hash_table::bucket_array::BucketArray;
use crate::Entry;
use std::iter::FusedIterator;
use std::{slice, vec};

/// An iterator over the entries of a [`HashMap`](super::HashMap).
pub struct Entries<'h, K, V> {
    slots: slice::Iter<'h, Option<Bucket<K, V>>>,
    current: Option<slice::Iter<'h, Entry<K, V>>>,
    remaining: usize,
}

impl<'h, K, V> Entries<'h, K, V> {
    pub(crate) fn new(array: &'h BucketArray<K, V>) -> Self {
        Self {
            slots: array.slots(),
            current: None,
            remaining: array.num_entries(),
        }
    }
}

impl<'h, K, V> Iterator for Entries<'h, K, V> {
    type Item = &'h Entry<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(entry);
            }
            self.current = self.slots.next()?.as_ref().map(Bucket::iter);
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}
impl<K, V> FusedIterator for Entries<'_, K, V> {}

impl<K, V> Clone for Entries<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

/// A mutable iterator over the entries of a [`HashMap`](super::HashMap).
///
/// Keys cannot be modified through [`Entry`].
pub struct EntriesMut<'h, K, V> {
    slots: slice::IterMut<'h, Option<Bucket<K, V>>>,
    current: Option<slice::IterMut<'h, Entry<K, V>>>,
    remaining: usize,
}

impl<'h, K, V> EntriesMut<'h, K, V> {
    pub(crate) fn new(array: &'h mut BucketArray<K, V>) -> Self {
        let remaining = array.num_entries();
        Self {
            slots: array.slots_mut(),
            current: None,
            remaining,
        }
    }
}

impl<'h, K, V> Iterator for EntriesMut<'h, K, V> {
    type Item = &'h mut Entry<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(entry);
            }
            self.current = self.slots.next()?.as_mut().map(Bucket::iter_mut);
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for EntriesMut<'_, K, V> {}
impl<K, V> FusedIterator for EntriesMut<'_, K, V> {}

/// An iterator over the key-value pairs of a [`HashMap`](super::HashMap).
pub struct Iter<'h, K, V> {
    inner: Entries<'h, K, V>,
}

impl<'h, K, V> Iter<'h, K, V> {
    pub(crate) fn new(inner: Entries<'h, K, V>) -> Self {
        Self { inner }
    }
}

impl<'h, K, V> Iterator for Iter<'h, K, V> {
    type Item = (&'h K, &'h V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::get)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A mutable iterator over the key-value pairs of a [`HashMap`](super::HashMap).
pub struct IterMut<'h, K, V> {
    inner: EntriesMut<'h, K, V>,
}

impl<'h, K, V> IterMut<'h, K, V> {
    pub(crate) fn new(inner: EntriesMut<'h, K, V>) -> Self {
        Self { inner }
    }
}

impl<'h, K, V> Iterator for IterMut<'h, K, V> {
    type Item = (&'h K, &'h mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::get_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of a [`HashMap`](super::HashMap).
pub struct Keys<'h, K, V> {
    inner: Entries<'h, K, V>,
}

impl<'h, K, V> Keys<'h, K, V> {
    pub(crate) fn new(inner: Entries<'h, K, V>) -> Self {
        Self { inner }
    }
}

impl<'h, K, V> Iterator for Keys<'h, K, V> {
    type Item = &'h K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`HashMap`](super::HashMap).
///
/// Equal values mapped by different keys are all yielded.
pub struct Values<'h, K, V> {
    inner: Entries<'h, K, V>,
}

impl<'h, K, V> Values<'h, K, V> {
    pub(crate) fn new(inner: Entries<'h, K, V>) -> Self {
        Self { inner }
    }
}

impl<'h, K, V> Iterator for Values<'h, K, V> {
    type Item = &'h V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of a [`HashMap`](super::HashMap).
pub struct ValuesMut<'h, K, V> {
    inner: EntriesMut<'h, K, V>,
}

impl<'h, K, V> ValuesMut<'h, K, V> {
    pub(crate) fn new(inner: EntriesMut<'h, K, V>) -> Self {
        Self { inner }
    }
}

impl<'h, K, V> Iterator for ValuesMut<'h, K, V> {
    type Item = &'h mut V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::value_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

/// An owning iterator over the key-value pairs of a [`HashMap`](super::HashMap).
pub struct IntoIter<K, V> {
    slots: vec::IntoIter<Option<Bucket<K, V>>>,
    current: Option<vec::IntoIter<Entry<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(array: BucketArray<K, V>) -> Self {
        let remaining = array.num_entries();
        Self {
            slots: array.into_slots(),
            current: None,
            remaining,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(entry.into_parts());
            }
            self.current = self
                .slots
                .next()?
                .map(|bucket| bucket.into_entries().into_iter());
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
