//! [`Map`] is the capability set shared by [`HashMap`] and [`std::collections::HashMap`].

use crate::HashMap;
use std::collections::hash_map;
use std::hash::{BuildHasher, Hash};

/// A minimal associative container interface.
///
/// It lets a caller drive different map implementations through a single interface, e.g., to
/// compare their performance.
///
/// # Examples
///
/// ```
/// use chainmap::{HashMap, Map};
///
/// fn fill(map: &mut dyn Map<String, usize>, n: usize) {
///     for i in 0..n {
///         map.put(i.to_string(), i);
///     }
/// }
///
/// let mut chained: HashMap<String, usize> = HashMap::default();
/// let mut std_map: std::collections::HashMap<String, usize> = Default::default();
/// fill(&mut chained, 64);
/// fill(&mut std_map, 64);
///
/// assert_eq!(Map::len(&chained), Map::len(&std_map));
/// assert_eq!(Map::get(&chained, &"7".to_string()), Some(&7));
/// ```
pub trait Map<K, V> {
    /// Puts a key-value pair, returning the previous value of the key.
    fn put(&mut self, key: K, val: V) -> Option<V>;

    /// Returns a reference to the value associated with the key.
    fn get(&self, key: &K) -> Option<&V>;

    /// Removes the key, returning its value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Checks if the key exists.
    fn contains_key(&self, key: &K) -> bool;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    fn clear(&mut self);
}

impl<K, V, H> Map<K, V> for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    #[inline]
    fn put(&mut self, key: K, val: V) -> Option<V> {
        HashMap::put(self, key, val)
    }
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }
    #[inline]
    fn clear(&mut self) {
        HashMap::clear(self);
    }
}

impl<K, V, S> Map<K, V> for hash_map::HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn put(&mut self, key: K, val: V) -> Option<V> {
        self.insert(key, val)
    }
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        hash_map::HashMap::get(self, key)
    }
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        hash_map::HashMap::remove(self, key)
    }
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        hash_map::HashMap::contains_key(self, key)
    }
    #[inline]
    fn len(&self) -> usize {
        hash_map::HashMap::len(self)
    }
    #[inline]
    fn clear(&mut self) {
        hash_map::HashMap::clear(self);
    }
}
