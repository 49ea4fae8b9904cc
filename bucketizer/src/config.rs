use crate::{Bucket, BuildError};

/// The externally configured description of a bucket set: a seed and an
/// ordered list of buckets.
///
/// Both are part of the mapping. Changing the seed, reordering the buckets or
/// changing any weight re-partitions essentially every value, so a `Config`
/// should be treated as versioned data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub(crate) seed: String,
    pub(crate) buckets: Vec<Bucket>,
}

impl Config {
    pub fn new(seed: impl Into<String>, buckets: Vec<Bucket>) -> Self {
        Self {
            seed: seed.into(),
            buckets,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn total_weight(&self) -> u64 {
        self.buckets.iter().map(|b| b.weight as u64).sum()
    }

    /// Check that the config describes a usable bucket set.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.buckets.is_empty() {
            return Err(BuildError::NoBuckets);
        }

        if self.total_weight() == 0 {
            return Err(BuildError::ZeroWeight);
        }

        Ok(())
    }
}
