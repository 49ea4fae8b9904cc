use crate::ranges::Ranges;
use crate::{Bucket, Bucketizer, BuildError, Config, Error, Value};

use log::{debug, error, warn};
use xxhash_rust::xxh64::Xxh64;

/// Builds an `XxHashBucketizer`, rejecting bucket sets that could never
/// resolve a value.
pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            config: Config::new(seed, Vec::new()),
        }
    }

    /// Append a bucket. Buckets are assigned ranges in the order they are
    /// added.
    pub fn bucket(mut self, name: impl Into<String>, weight: u32) -> Self {
        self.config.buckets.push(Bucket::new(name, weight));
        self
    }

    pub fn buckets<I>(mut self, buckets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bucket>,
    {
        self.config
            .buckets
            .extend(buckets.into_iter().map(Into::into));
        self
    }

    /// # Errors
    /// * `BuildError::NoBuckets` if no buckets were added
    /// * `BuildError::ZeroWeight` if every bucket has zero weight
    pub fn build(self) -> Result<XxHashBucketizer, BuildError> {
        self.config.validate()?;

        Ok(XxHashBucketizer::from_config(self.config))
    }
}

impl From<Config> for Builder {
    fn from(config: Config) -> Self {
        Self { config }
    }
}

/// Assigns values to weighted buckets using xxHash64.
///
/// A value is hashed together with the seed, the digest is reduced modulo the
/// total weight, and the bucket whose range contains the remainder is
/// returned. The assignment only depends on the value, the seed, and the
/// ordered bucket weights, so it is stable across processes and restarts.
///
/// The bucketizer is immutable once built and can be shared between threads,
/// eg: behind an `Arc`.
#[derive(Clone, Debug)]
pub struct XxHashBucketizer {
    pub(crate) buckets: Box<[Bucket]>,
    pub(crate) ranges: Ranges,
    pub(crate) seed: Box<[u8]>,
}

impl XxHashBucketizer {
    /// Construct a new bucketizer from a seed and an ordered list of buckets.
    ///
    /// This never fails. A bucket set with zero total weight (including an
    /// empty one) is accepted here and every call to `bucket()` on it will
    /// return `Error::ZeroWeight`. Use `Builder` to reject such sets up front.
    pub fn new<I>(seed: &str, buckets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bucket>,
    {
        let buckets = buckets.into_iter().map(Into::into).collect();
        Self::from_config(Config::new(seed, buckets))
    }

    pub(crate) fn from_config(config: Config) -> Self {
        let ranges = Ranges::new(&config.buckets);

        if ranges.weight_sum() == 0 {
            warn!(
                "bucketizer has zero total weight across {} buckets, values cannot be assigned",
                config.buckets.len()
            );
        } else {
            debug!(
                "bucketizer built with {} buckets and total weight {}",
                config.buckets.len(),
                ranges.weight_sum()
            );
        }

        Self {
            buckets: config.buckets.into(),
            ranges,
            seed: config.seed.into_bytes().into(),
        }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn seed(&self) -> &[u8] {
        &self.seed
    }

    pub fn weight_sum(&self) -> u64 {
        self.ranges.weight_sum()
    }

    /// The cumulative boundaries, one more than the number of buckets.
    pub fn ranges(&self) -> &[u64] {
        self.ranges.as_slice()
    }

    /// Resolve a value directly to its `Bucket`.
    pub fn get<'a, V: Into<Value<'a>>>(&self, value: V) -> Result<&Bucket, Error> {
        let index = self.bucket(value)?;
        Ok(&self.buckets[index])
    }

    /// xxHash64 (seed 0) over `value ++ seed`. The two parts are streamed into
    /// the hasher so the caller's buffer is never appended to.
    fn digest(&self, value: &[u8]) -> u64 {
        let mut hasher = Xxh64::new(0);
        hasher.update(value);
        hasher.update(&self.seed);
        hasher.digest()
    }
}

impl Bucketizer for XxHashBucketizer {
    fn bucket_bytes(&self, value: &[u8]) -> Result<usize, Error> {
        let weight_sum = self.ranges.weight_sum();
        if weight_sum == 0 {
            return Err(Error::ZeroWeight);
        }

        let remainder = self.digest(value) % weight_sum;

        match self.ranges.index_of(remainder) {
            Some(index) => Ok(index),
            None => {
                error!(
                    "remainder {} not covered by bucket ranges {:?}",
                    remainder,
                    self.ranges.as_slice()
                );
                Err(Error::Inconsistent { remainder })
            }
        }
    }
}
