//! [`HashMap`] is a fixed-capacity hash map with separately chained buckets.

mod iter;

pub use iter::{Entries, EntriesMut, IntoIter, Iter, IterMut, Keys, Values, ValuesMut};

use super::hash_table::bucket_array::BucketArray;
use super::hash_table::HashTable;
use super::{Entry, Equivalent, Error, Result};
use std::collections::hash_map::RandomState;
use std::fmt::{self, Debug, Display};
use std::hash::{BuildHasher, Hash};

/// The number of buckets of a [`HashMap`] created without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 100;

/// Fixed-capacity hash map.
///
/// [`HashMap`] stores its entries in an array of buckets whose length is decided at construction
/// and never changes. The bucket of a key is `hash(key) mod capacity`; keys landing in the same
/// bucket are chained in an ordered sequence and told apart by key equality.
///
/// ## The key features of [`HashMap`]
///
/// * No resizing: the bucket array is never reallocated, and entries are never rehashed.
/// * Lazy buckets: a bucket is allocated when the first entry is inserted into it.
/// * Derived views: keys, values, and entries are enumerated from the buckets on demand.
///
/// ## Performance
///
/// Lookups scan a single bucket, so the cost of an operation grows with the load factor. A
/// [`HashMap`] holding far more entries than its capacity degrades towards a linear scan; size
/// the map with [`HashMap::with_capacity`] when the number of entries is known.
///
/// ## Thread safety
///
/// Modifying methods take `&mut self`; a [`HashMap`] shared across threads for modification must
/// be wrapped in a lock, e.g., [`std::sync::Mutex`].
pub struct HashMap<K, V, H = RandomState>
where
    H: BuildHasher,
{
    array: BucketArray<K, V>,
    build_hasher: H,
}

impl<K, V, H> HashMap<K, V, H>
where
    H: BuildHasher,
{
    /// Creates an empty [`HashMap`] of [`DEFAULT_CAPACITY`] buckets with the given
    /// [`BuildHasher`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let hashmap: HashMap<u64, u32, RandomState> = HashMap::with_hasher(RandomState::new());
    /// assert_eq!(hashmap.capacity(), 100);
    /// ```
    #[inline]
    pub fn with_hasher(build_hasher: H) -> Self {
        Self {
            array: BucketArray::new(DEFAULT_CAPACITY),
            build_hasher,
        }
    }

    /// Creates an empty [`HashMap`] with the specified number of buckets and [`BuildHasher`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::{Error, HashMap};
    /// use std::collections::hash_map::RandomState;
    ///
    /// let hashmap: HashMap<u64, u32, RandomState> =
    ///     HashMap::with_capacity_and_hasher(1000, RandomState::new()).unwrap();
    /// assert_eq!(hashmap.capacity(), 1000);
    ///
    /// let result = HashMap::<u64, u32, RandomState>::with_capacity_and_hasher(0, RandomState::new());
    /// assert_eq!(result.err(), Some(Error::InvalidCapacity(0)));
    /// ```
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: H) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            array: BucketArray::new(capacity),
            build_hasher,
        })
    }

    /// Returns the number of buckets of the [`HashMap`].
    ///
    /// The capacity is fixed at construction; the number of entries may exceed it.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<u64, u32> = HashMap::with_capacity(4).unwrap();
    /// for i in 0..16 {
    ///     hashmap.put(i, 0);
    /// }
    /// assert_eq!(hashmap.capacity(), 4);
    /// assert_eq!(hashmap.len(), 16);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.array.num_buckets()
    }

    /// Returns the number of entries in the [`HashMap`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<u64, u32> = HashMap::default();
    ///
    /// hashmap.put(1, 0);
    /// assert_eq!(hashmap.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.array.num_entries()
    }

    /// Returns `true` if the [`HashMap`] is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<u64, u32> = HashMap::default();
    ///
    /// assert!(hashmap.is_empty());
    /// hashmap.put(1, 0);
    /// assert!(!hashmap.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the ratio of the number of entries to the number of buckets.
    ///
    /// The load factor is informational only; it never triggers a resize.
    #[allow(clippy::cast_precision_loss)]
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Returns a reference to the [`BuildHasher`].
    #[inline]
    pub fn hasher(&self) -> &H {
        &self.build_hasher
    }

    /// Clears the [`HashMap`] by dropping all buckets.
    ///
    /// The capacity is retained, and the [`HashMap`] behaves like a freshly constructed one.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<u64, u32> = HashMap::with_capacity(7).unwrap();
    ///
    /// hashmap.put(1, 0);
    /// hashmap.clear();
    ///
    /// assert!(hashmap.is_empty());
    /// assert_eq!(hashmap.capacity(), 7);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.array.clear();
    }

    /// Returns an iterator over the entries in bucket order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::{Entry, HashMap};
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    /// hashmap.put("Hack", 5);
    ///
    /// assert_eq!(hashmap.entries().len(), 1);
    /// assert_eq!(hashmap.entries().next(), Some(&Entry::new("Hack", 5)));
    /// ```
    #[inline]
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries::new(&self.array)
    }

    /// Returns a mutable iterator over the entries in bucket order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    /// hashmap.put("Hack", 5);
    ///
    /// for entry in hashmap.entries_mut() {
    ///     entry.set_value(6);
    /// }
    /// assert_eq!(hashmap.get("Hack"), Some(&6));
    /// ```
    #[inline]
    pub fn entries_mut(&mut self) -> EntriesMut<'_, K, V> {
        EntriesMut::new(&mut self.array)
    }

    /// Returns an iterator over the key-value pairs in bucket order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.entries())
    }

    /// Returns an iterator over the key-value pairs in bucket order, with mutable references to
    /// the values.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.entries_mut())
    }

    /// Returns an iterator over the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let hashmap: HashMap<u64, u32> = (0..10).map(|i| (i, 0)).collect();
    ///
    /// let mut keys: Vec<u64> = hashmap.keys().copied().collect();
    /// keys.sort_unstable();
    /// assert_eq!(keys, (0..10).collect::<Vec<_>>());
    /// ```
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.entries())
    }

    /// Returns an iterator over the values.
    ///
    /// A value mapped by several keys is yielded once per key.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let hashmap: HashMap<u64, u32> = (0..10).map(|i| (i, 7)).collect();
    ///
    /// assert_eq!(hashmap.values().len(), 10);
    /// assert!(hashmap.values().all(|v| *v == 7));
    /// ```
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.entries())
    }

    /// Returns an iterator over mutable references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<u64, u32> = (0..10).map(|i| (i, 7)).collect();
    ///
    /// hashmap.values_mut().for_each(|v| *v += 1);
    /// assert!(hashmap.values().all(|v| *v == 8));
    /// ```
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.entries_mut())
    }
}

impl<K, V, H> HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    /// Puts a key-value pair into the [`HashMap`].
    ///
    /// If the key is already present, its entry is removed first, and the new entry is appended
    /// to the tail of the bucket. Returns the old value if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<u64, u32> = HashMap::default();
    ///
    /// assert!(hashmap.put(1, 0).is_none());
    /// assert_eq!(hashmap.put(1, 1), Some(0));
    /// assert_eq!(hashmap.get(&1), Some(&1));
    /// assert_eq!(hashmap.len(), 1);
    /// ```
    #[inline]
    pub fn put(&mut self, key: K, val: V) -> Option<V> {
        self.replace_entry(Entry::new(key, val))
            .map(|evicted| evicted.into_parts().1)
    }

    /// Puts a key-value pair into the [`HashMap`] if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error along with the supplied key-value pair if the key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    ///
    /// assert!(hashmap.put_if_absent("Levski", 52).is_ok());
    /// assert_eq!(hashmap.put_if_absent("Levski", 99), Err(("Levski", 99)));
    /// assert_eq!(hashmap.get("Levski"), Some(&52));
    /// ```
    #[inline]
    pub fn put_if_absent(&mut self, key: K, val: V) -> std::result::Result<(), (K, V)> {
        self.insert_entry(Entry::new(key, val))
            .map_err(Entry::into_parts)
    }

    /// Puts clones of all the key-value pairs of `other` into the [`HashMap`].
    ///
    /// Each pair is put as if by [`HashMap::put`], so values of keys present in both maps are
    /// overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    /// hashmap.put("Hack", 5);
    /// hashmap.put("Iniesta", 25);
    ///
    /// let mut other: HashMap<&str, u32> = HashMap::default();
    /// other.put("Game of thrones", 7);
    ///
    /// hashmap.put_all(&other);
    /// assert_eq!(hashmap.entries().len(), 3);
    /// assert!(hashmap.contains_key("Game of thrones"));
    /// ```
    #[inline]
    pub fn put_all<S>(&mut self, other: &HashMap<K, V, S>)
    where
        K: Clone,
        V: Clone,
        S: BuildHasher,
    {
        for (k, v) in other {
            self.put(k.clone(), v.clone());
        }
    }

    /// Returns a reference to the value associated with the key.
    ///
    /// Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<String, u32> = HashMap::default();
    ///
    /// hashmap.put(String::from("Hash"), 21);
    /// assert_eq!(hashmap.get("Hash"), Some(&21));
    /// assert!(hashmap.get("hash").is_none());
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.search_entry(key).map(Entry::value)
    }

    /// Returns a mutable reference to the value associated with the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<u64, u32> = HashMap::default();
    ///
    /// assert!(hashmap.get_mut(&1).is_none());
    /// hashmap.put(1, 10);
    /// if let Some(v) = hashmap.get_mut(&1) {
    ///     *v += 1;
    /// }
    /// assert_eq!(hashmap.get(&1), Some(&11));
    /// ```
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.search_entry_mut(key).map(Entry::value_mut)
    }

    /// Returns references to the stored key and the value associated with the key.
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.search_entry(key).map(Entry::get)
    }

    /// Reads a key-value pair.
    ///
    /// Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<u64, u32> = HashMap::default();
    ///
    /// assert!(hashmap.read(&1, |_, v| *v).is_none());
    /// hashmap.put(1, 10);
    /// assert_eq!(hashmap.read(&1, |_, v| *v).unwrap(), 10);
    /// ```
    #[inline]
    pub fn read<Q, R, F: FnOnce(&K, &V) -> R>(&self, key: &Q, reader: F) -> Option<R>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.get_key_value(key).map(|(k, v)| reader(k, v))
    }

    /// Returns the value associated with the key, or `default` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    ///
    /// hashmap.put("Hash", 21);
    /// assert_eq!(*hashmap.get_or("Hash", &1), 21);
    /// assert_eq!(*hashmap.get_or("Hashq", &1), 1);
    /// ```
    #[inline]
    pub fn get_or<'h, Q>(&'h self, key: &Q, default: &'h V) -> &'h V
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Checks if the key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    ///
    /// hashmap.put("Iniesta", 25);
    /// assert!(hashmap.contains_key("Iniesta"));
    /// assert!(!hashmap.contains_key("Rack"));
    /// ```
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.search_entry(key).is_some()
    }

    /// Checks if any key is mapped to the value.
    ///
    /// It scans every bucket, making its time complexity `O(N)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    ///
    /// hashmap.put("Hack", 5);
    /// assert!(hashmap.contains_value(&5));
    /// assert!(!hashmap.contains_value(&20));
    /// ```
    #[inline]
    pub fn contains_value(&self, val: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == val)
    }

    /// Removes a key-value pair if the key exists, and returns the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    ///
    /// hashmap.put("Hash", 21);
    /// assert_eq!(hashmap.remove("Hash"), Some(21));
    /// assert!(hashmap.remove("Hashing").is_none());
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key-value pair if the key exists, and returns the stored key and the value.
    #[inline]
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.remove_if(key, |_| true)
    }

    /// Removes a key-value pair if the key exists and the given condition is met.
    ///
    /// Returns `None` if the key does not exist or the condition was not met.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<u64, u32> = HashMap::default();
    ///
    /// hashmap.put(1, 0);
    /// assert!(hashmap.remove_if(&1, |v| { *v += 1; false }).is_none());
    /// assert_eq!(hashmap.remove_if(&1, |v| *v == 1).unwrap(), (1, 1));
    /// ```
    #[inline]
    pub fn remove_if<Q, F: FnOnce(&mut V) -> bool>(
        &mut self,
        key: &Q,
        condition: F,
    ) -> Option<(K, V)>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.remove_entry_if(key, condition).map(Entry::into_parts)
    }

    /// Removes a key-value pair if the key is mapped to a value equal to `val`.
    ///
    /// Returns `true` if the pair was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    ///
    /// hashmap.put("Hash", 21);
    /// assert!(!hashmap.remove_if_eq("Hash", &31));
    /// assert!(!hashmap.remove_if_eq("Test", &21));
    /// assert!(hashmap.remove_if_eq("Hash", &21));
    /// assert!(hashmap.get("Hash").is_none());
    /// ```
    #[inline]
    pub fn remove_if_eq<Q>(&mut self, key: &Q, val: &V) -> bool
    where
        Q: Equivalent<K> + Hash + ?Sized,
        V: PartialEq,
    {
        self.remove_if(key, |v| *v == *val).is_some()
    }

    /// Replaces the value associated with the key if the key exists.
    ///
    /// The entry is removed and re-appended to the tail of its bucket with the new value. Returns
    /// the old value, or `None` without modifying the [`HashMap`] if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    ///
    /// hashmap.put("Iniesta", 25);
    /// assert_eq!(hashmap.replace("Iniesta", 5), Some(25));
    /// assert!(hashmap.replace("LOl", 45).is_none());
    /// assert!(!hashmap.contains_key("LOl"));
    /// ```
    #[inline]
    pub fn replace<Q>(&mut self, key: &Q, val: V) -> Option<V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let (k, old) = self.remove_entry(key)?;
        let index = self.calculate_bucket_index(&k);
        self.bucket_array_mut().push(index, Entry::new(k, val));
        Some(old)
    }

    /// Replaces the value associated with the key if the key is mapped to a value equal to
    /// `old_val`.
    ///
    /// Returns `true` if the value was replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<&str, u32> = HashMap::default();
    ///
    /// hashmap.put("Hack", 5);
    /// hashmap.put("Iniesta", 25);
    /// assert!(hashmap.replace_if_eq("Iniesta", &25, 16));
    /// assert!(!hashmap.replace_if_eq("Hack", &85, 17));
    /// assert_eq!(hashmap.get("Hack"), Some(&5));
    /// ```
    #[inline]
    pub fn replace_if_eq<Q>(&mut self, key: &Q, old_val: &V, new_val: V) -> bool
    where
        Q: Equivalent<K> + Hash + ?Sized,
        V: PartialEq,
    {
        match self.remove_entry_if(key, |v| *v == *old_val) {
            Some(entry) => {
                let (k, _) = entry.into_parts();
                let index = self.calculate_bucket_index(&k);
                self.bucket_array_mut().push(index, Entry::new(k, new_val));
                true
            }
            None => false,
        }
    }

    /// Retains the entries specified by the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let mut hashmap: HashMap<u64, u32> = (0..10).map(|i| (i, 0)).collect();
    ///
    /// hashmap.retain(|k, _| k % 2 == 0);
    /// assert_eq!(hashmap.len(), 5);
    /// assert!(!hashmap.contains_key(&1));
    /// ```
    #[inline]
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut pred: F) {
        for index in 0..self.capacity() {
            let mut pos = 0;
            loop {
                let Some(bucket) = self.array.bucket_mut(index) else {
                    break;
                };
                let Some(entry) = bucket.get_mut(pos) else {
                    break;
                };
                let (k, v) = entry.get_mut();
                if pred(k, v) {
                    pos += 1;
                } else {
                    self.array.remove(index, pos);
                }
            }
        }
    }

    /// Returns the index of the bucket that may contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let hashmap: HashMap<u64, u32> = HashMap::with_capacity(16).unwrap();
    ///
    /// let bucket_index = hashmap.bucket_index(&11);
    /// assert!(bucket_index < hashmap.capacity());
    /// ```
    #[inline]
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.calculate_bucket_index(key)
    }
}

impl<K, V> HashMap<K, V, RandomState> {
    /// Creates an empty [`HashMap`] of [`DEFAULT_CAPACITY`] buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let hashmap: HashMap<u64, u32> = HashMap::new();
    ///
    /// let result = hashmap.capacity();
    /// assert_eq!(result, 100);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty [`HashMap`] with the specified number of buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let hashmap: HashMap<u64, u32> = HashMap::with_capacity(1000).unwrap();
    /// assert_eq!(hashmap.capacity(), 1000);
    /// assert!(HashMap::<u64, u32>::with_capacity(0).is_err());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, H> Clone for HashMap<K, V, H>
where
    K: Clone,
    V: Clone,
    H: BuildHasher + Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            array: self.array.clone(),
            build_hasher: self.build_hasher.clone(),
        }
    }
}

impl<K, V, H> Debug for HashMap<K, V, H>
where
    K: Debug,
    V: Debug,
    H: BuildHasher,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, H> Display for HashMap<K, V, H>
where
    K: Display,
    V: Display,
    H: BuildHasher,
{
    /// Renders the entry list in braces: `{[[key=k1, value=v1], [key=k2, value=v2]]}`.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{[")?;
        for (i, entry) in self.entries().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(entry, f)?;
        }
        f.write_str("]}")
    }
}

impl<K, V, H> Default for HashMap<K, V, H>
where
    H: BuildHasher + Default,
{
    /// Creates an empty default [`HashMap`] of [`DEFAULT_CAPACITY`] buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::HashMap;
    ///
    /// let hashmap: HashMap<u64, u32> = HashMap::default();
    ///
    /// let result = hashmap.capacity();
    /// assert_eq!(result, 100);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::with_hasher(H::default())
    }
}

impl<K, V, H> Extend<(K, V)> for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    #[inline]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(|(k, v)| {
            self.put(k, v);
        });
    }
}

impl<K, V, H> FromIterator<(K, V)> for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    #[inline]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut hashmap = Self::default();
        hashmap.extend(iter);
        hashmap
    }
}

impl<'h, K, V, H> IntoIterator for &'h HashMap<K, V, H>
where
    H: BuildHasher,
{
    type Item = (&'h K, &'h V);
    type IntoIter = Iter<'h, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'h, K, V, H> IntoIterator for &'h mut HashMap<K, V, H>
where
    H: BuildHasher,
{
    type Item = (&'h K, &'h mut V);
    type IntoIter = IterMut<'h, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, H> IntoIterator for HashMap<K, V, H>
where
    H: BuildHasher,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.array)
    }
}

impl<K, V, H> HashTable<K, V, H> for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    #[inline]
    fn hasher(&self) -> &H {
        &self.build_hasher
    }
    #[inline]
    fn bucket_array(&self) -> &BucketArray<K, V> {
        &self.array
    }
    #[inline]
    fn bucket_array_mut(&mut self) -> &mut BucketArray<K, V> {
        &mut self.array
    }
}

impl<K, V, H> PartialEq for HashMap<K, V, H>
where
    K: Eq + Hash,
    V: PartialEq,
    H: BuildHasher,
{
    /// Compares two [`HashMap`] instances.
    ///
    /// Two instances are equal if they hold equal sets of entries, regardless of their
    /// capacities and the order of entries in buckets.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, H> Eq for HashMap<K, V, H>
where
    K: Eq + Hash,
    V: Eq,
    H: BuildHasher,
{
}
