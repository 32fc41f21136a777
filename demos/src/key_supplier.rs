use rand::distr::{Alphanumeric, SampleString};
use rand::rngs::ThreadRng;
use std::collections::HashSet;

/// Number of distinct characters [`Alphanumeric`] draws from.
const ALPHABET_LEN: u128 = 62;

/// Produces a fresh key on every call.
pub trait KeySupplier {
    /// Returns a key that has never been returned by this supplier before, or `None` once every
    /// possible key has been handed out.
    fn next_key(&mut self) -> Option<String>;
}

/// Supplies random alphanumeric strings, rejecting any that was handed out before.
pub struct RandomKeys {
    rng: ThreadRng,
    len: usize,
    issued: HashSet<String>,
}

impl RandomKeys {
    pub fn new(len: usize) -> Self {
        Self {
            rng: rand::rng(),
            len,
            issued: HashSet::new(),
        }
    }

    /// Returns the number of distinct keys of this length, or `None` if it does not fit a `u128`.
    pub fn key_space(&self) -> Option<u128> {
        u32::try_from(self.len)
            .ok()
            .and_then(|exp| ALPHABET_LEN.checked_pow(exp))
    }
}

impl KeySupplier for RandomKeys {
    fn next_key(&mut self) -> Option<String> {
        if self
            .key_space()
            .is_some_and(|space| self.issued.len() as u128 >= space)
        {
            return None;
        }
        loop {
            let key = Alphanumeric.sample_string(&mut self.rng, self.len);
            if self.issued.insert(key.clone()) {
                return Some(key);
            }
        }
    }
}
