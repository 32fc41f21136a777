use super::bucket::Bucket;
use crate::Entry;

/// [`BucketArray`] is a fixed-length array of lazily allocated [`Bucket`] instances.
///
/// The number of buckets is decided at construction and never changes; the array also keeps
/// track of the total number of entries across all buckets.
#[derive(Clone, Debug)]
pub struct BucketArray<K, V> {
    buckets: Box<[Option<Bucket<K, V>>]>,
    num_entries: usize,
}

impl<K, V> BucketArray<K, V> {
    /// Creates a new [`BucketArray`] with `array_len` empty slots.
    ///
    /// `array_len` must be positive; it is validated by the constructors of
    /// [`HashMap`](crate::HashMap).
    pub(crate) fn new(array_len: usize) -> Self {
        debug_assert_ne!(array_len, 0);
        Self {
            buckets: (0..array_len).map(|_| None).collect(),
            num_entries: 0,
        }
    }

    /// Returns the number of bucket slots.
    #[inline]
    pub(crate) fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries stored in all buckets.
    #[inline]
    pub(crate) fn num_entries(&self) -> usize {
        self.num_entries
    }

    /// Returns the number of slots whose [`Bucket`] has been allocated.
    #[cfg(test)]
    pub(crate) fn num_allocated_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_some()).count()
    }

    /// Calculates the bucket index for the hash value.
    ///
    /// The index is `hash mod num_buckets`, which is never negative for an unsigned hash.
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    pub(crate) fn calculate_bucket_index(&self, hash: u64) -> usize {
        // The remainder is smaller than `num_buckets`, so it fits in `usize`.
        (hash % self.buckets.len() as u64) as usize
    }

    /// Returns a reference to the [`Bucket`] at the index if it has been allocated.
    #[inline]
    pub(crate) fn bucket(&self, index: usize) -> Option<&Bucket<K, V>> {
        self.buckets.get(index).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the [`Bucket`] at the index if it has been allocated.
    #[inline]
    pub(crate) fn bucket_mut(&mut self, index: usize) -> Option<&mut Bucket<K, V>> {
        self.buckets.get_mut(index).and_then(Option::as_mut)
    }

    /// Appends an entry to the [`Bucket`] at the index, allocating the bucket if it has never been
    /// used.
    ///
    /// The caller must ensure that the bucket holds no entry with an equal key.
    #[inline]
    pub(crate) fn push(&mut self, index: usize, entry: Entry<K, V>) {
        self.buckets[index].get_or_insert_with(Bucket::new).push(entry);
        self.num_entries += 1;
    }

    /// Removes the entry at `pos` in the [`Bucket`] at `index`.
    ///
    /// The bucket stays allocated even if it becomes empty.
    #[inline]
    pub(crate) fn remove(&mut self, index: usize, pos: usize) -> Option<Entry<K, V>> {
        let bucket = self.bucket_mut(index)?;
        if pos >= bucket.len() {
            return None;
        }
        let entry = bucket.remove(pos);
        self.num_entries -= 1;
        Some(entry)
    }

    /// Drops every [`Bucket`], returning the array to its freshly constructed state.
    pub(crate) fn clear(&mut self) {
        self.buckets.iter_mut().for_each(|b| *b = None);
        self.num_entries = 0;
    }

    /// Returns an iterator over the bucket slots.
    #[inline]
    pub(crate) fn slots(&self) -> std::slice::Iter<'_, Option<Bucket<K, V>>> {
        self.buckets.iter()
    }

    /// Returns an iterator over the bucket slots for modification.
    #[inline]
    pub(crate) fn slots_mut(&mut self) -> std::slice::IterMut<'_, Option<Bucket<K, V>>> {
        self.buckets.iter_mut()
    }

    /// Consumes the [`BucketArray`] and returns the allocated buckets.
    #[inline]
    pub(crate) fn into_slots(self) -> std::vec::IntoIter<Option<Bucket<K, V>>> {
        self.buckets.into_vec().into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lazy_allocation() {
        let mut array: BucketArray<u64, u64> = BucketArray::new(7);
        assert_eq!(array.num_buckets(), 7);
        assert_eq!(array.num_allocated_buckets(), 0);
        assert!(array.bucket(3).is_none());

        array.push(3, Entry::new(3, 30));
        array.push(3, Entry::new(10, 100));
        assert_eq!(array.num_allocated_buckets(), 1);
        assert_eq!(array.num_entries(), 2);
        assert_eq!(array.bucket(3).map(Bucket::len), Some(2));

        assert_eq!(array.remove(3, 0).map(Entry::into_parts), Some((3, 30)));
        assert!(array.remove(3, 5).is_none());
        assert!(array.remove(4, 0).is_none());
        assert_eq!(array.num_entries(), 1);
        assert_eq!(array.num_allocated_buckets(), 1);

        array.clear();
        assert_eq!(array.num_entries(), 0);
        assert_eq!(array.num_allocated_buckets(), 0);
        assert_eq!(array.num_buckets(), 7);
    }

    #[test]
    fn bucket_index_in_range() {
        let array: BucketArray<u64, u64> = BucketArray::new(100);
        for hash in [0, 1, 99, 100, 101, u64::MAX] {
            assert!(array.calculate_bucket_index(hash) < 100);
        }
        assert_eq!(array.calculate_bucket_index(205), 5);
    }
}
