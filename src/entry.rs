//! [`Entry`] is the key-value pair stored in a [`HashMap`](crate::HashMap).

use std::fmt::{self, Display};
use std::mem::replace;

/// A key-value pair owned by a [`HashMap`](crate::HashMap).
///
/// The key is fixed at construction; the value can be modified in place. Two entries are equal
/// if both their keys and their values are equal, regardless of where they are stored.
///
/// # Examples
///
/// ```
/// use chainmap::Entry;
///
/// let mut entry = Entry::new("Vladislav", 6.0);
/// assert_eq!(entry.set_value(7.0), 6.0);
/// assert_eq!(entry.to_string(), "[key=Vladislav, value=7]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new [`Entry`].
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns a reference to the key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value, returning the old one.
    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        replace(&mut self.value, value)
    }

    /// Returns references to the key and the value.
    #[inline]
    pub const fn get(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Returns a reference to the key and a mutable reference to the value.
    #[inline]
    pub fn get_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    /// Consumes the [`Entry`] and returns the key and the value.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: Display, V: Display> Display for Entry<K, V> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[key={}, value={}]", self.key, self.value)
    }
}
