#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Fixed-capacity hash map with separately chained buckets.
//!
//! # chainmap::HashMap
//! A hash map whose bucket array is sized once at construction and never resized. Colliding
//! keys are chained in per-bucket entry sequences and disambiguated by key equality.
//!
//! # chainmap::Map
//! A minimal map capability set implemented by [`HashMap`] and by
//! [`std::collections::HashMap`], so callers can drive either through one interface.

mod equivalent;
pub use equivalent::Equivalent;

mod error;
pub use error::{Error, Result};

mod entry;
pub use entry::Entry;

pub mod hash_map;
pub use hash_map::HashMap;

mod map;
pub use map::Map;

mod hash_table;

#[cfg(feature = "serde")]
mod serde;
