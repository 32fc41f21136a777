/// Errors returned when a [`HashMap`](crate::HashMap) cannot be constructed as requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The bucket array must have at least one bucket.
    #[error("invalid capacity {0}: the bucket array needs at least one bucket")]
    InvalidCapacity(usize),
}

/// Result type of fallible [`HashMap`](crate::HashMap) constructors.
pub type Result<T> = std::result::Result<T, Error>;
