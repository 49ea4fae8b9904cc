use thiserror::Error;

/// Errors returned when resolving a value to a bucket.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),
    #[error("the total weight of all buckets is zero")]
    ZeroWeight,
    #[error("invalid remainder value: {remainder} is not covered by any bucket range")]
    Inconsistent { remainder: u64 },
}

/// Errors returned by the fail-fast `Builder`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("at least one bucket is required")]
    NoBuckets,
    #[error("the total weight of all buckets is zero")]
    ZeroWeight,
}
