pub mod bucket;
pub mod bucket_array;

use crate::{Entry, Equivalent};
use bucket_array::BucketArray;
use std::hash::{BuildHasher, Hash, Hasher};

/// `HashTable` defines common functions for hash table implementations backed by a
/// [`BucketArray`].
pub(super) trait HashTable<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    /// Returns the hash value of the key.
    #[inline]
    fn hash<Q>(&self, key: &Q) -> u64
    where
        Q: Hash + ?Sized,
    {
        let mut h = self.hasher().build_hasher();
        key.hash(&mut h);
        h.finish()
    }

    /// Returns a reference to its [`BuildHasher`].
    fn hasher(&self) -> &H;

    /// Returns a reference to the [`BucketArray`].
    fn bucket_array(&self) -> &BucketArray<K, V>;

    /// Returns a mutable reference to the [`BucketArray`].
    fn bucket_array_mut(&mut self) -> &mut BucketArray<K, V>;

    /// Calculates the bucket index for the key.
    #[inline]
    fn calculate_bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        self.bucket_array().calculate_bucket_index(self.hash(key))
    }

    /// Searches for an entry associated with the given key.
    #[inline]
    fn search_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let index = self.calculate_bucket_index(key);
        self.bucket_array().bucket(index)?.search(key)
    }

    /// Searches for an entry associated with the given key for modification.
    #[inline]
    fn search_entry_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let index = self.calculate_bucket_index(key);
        self.bucket_array_mut().bucket_mut(index)?.search_mut(key)
    }

    /// Returns the bucket index of the key, and the position of its entry in the bucket if the
    /// key is present.
    #[inline]
    fn locate<Q>(&self, key: &Q) -> (usize, Option<usize>)
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let index = self.calculate_bucket_index(key);
        let pos = self
            .bucket_array()
            .bucket(index)
            .and_then(|bucket| bucket.position(key));
        (index, pos)
    }

    /// Removes the entry associated with the key if `condition` holds for its value.
    #[inline]
    fn remove_entry_if<Q, F: FnOnce(&mut V) -> bool>(
        &mut self,
        key: &Q,
        condition: F,
    ) -> Option<Entry<K, V>>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let (index, pos) = self.locate(key);
        let pos = pos?;
        let array = self.bucket_array_mut();
        let entry = array.bucket_mut(index)?.get_mut(pos)?;
        if !condition(entry.value_mut()) {
            return None;
        }
        array.remove(index, pos)
    }

    /// Inserts an entry, first evicting the entry with an equal key if there is one.
    ///
    /// The new entry is always appended to the tail of its bucket, therefore replacing a value
    /// moves the entry behind its former successors. Returns the evicted entry.
    #[inline]
    fn replace_entry(&mut self, entry: Entry<K, V>) -> Option<Entry<K, V>> {
        let (index, pos) = self.locate(entry.key());
        let array = self.bucket_array_mut();
        let evicted = pos.and_then(|pos| array.remove(index, pos));
        array.push(index, entry);
        evicted
    }

    /// Inserts an entry only if no entry with an equal key exists.
    ///
    /// Returns the rejected entry otherwise.
    #[inline]
    fn insert_entry(&mut self, entry: Entry<K, V>) -> Result<(), Entry<K, V>> {
        let (index, pos) = self.locate(entry.key());
        if pos.is_some() {
            return Err(entry);
        }
        self.bucket_array_mut().push(index, entry);
        Ok(())
    }
}
