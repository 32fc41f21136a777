//! Key equivalence used by lookups that accept a borrowed form of the key.

use std::borrow::Borrow;

/// Key equivalence trait.
///
/// A type implementing [`Equivalent<K>`] must hash identically to the `K` it is equivalent to,
/// otherwise lookups land in the wrong bucket.
pub trait Equivalent<K: ?Sized> {
    /// Compares `self` to `key` and returns `true` if they are equal.
    fn equivalent(&self, key: &K) -> bool;
}

impl<Q: ?Sized, K: ?Sized> Equivalent<K> for Q
where
    Q: Eq,
    K: Borrow<Q>,
{
    #[inline]
    fn equivalent(&self, key: &K) -> bool {
        PartialEq::eq(self, key.borrow())
    }
}
