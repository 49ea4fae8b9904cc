//! This crate assigns values to a fixed set of weighted buckets. The same
//! value always lands in the same bucket, and across many values the share of
//! each bucket approaches its share of the total weight. Typical uses are
//! traffic splitting, A/B test arms, and partitioning.
//!
//! Each bucket owns a range of the reduced hash space that is as wide as its
//! weight. Buckets with zero weight own an empty range and are never chosen.
//! Adding, removing or reweighting buckets moves most values to a different
//! bucket, there is no attempt at minimal disruption.
//!
//! * `XxHashBucketizer` - hashes `value ++ seed` with xxHash64
//!
//! ```
//! use bucketizer::{Builder, Bucketizer};
//!
//! let bucketizer = Builder::new("checkout-v2")
//!     .bucket("control", 90)
//!     .bucket("treatment", 10)
//!     .build()
//!     .unwrap();
//!
//! let arm = bucketizer.bucket("customer-1234").unwrap();
//! assert!(arm < 2);
//! assert_eq!(bucketizer.bucket("customer-1234"), Ok(arm));
//! ```

mod bucket;
mod config;
mod errors;
mod ranges;
mod value;
mod xxhash;

pub use bucket::Bucket;
pub use config::Config;
pub use errors::{BuildError, Error};
pub use value::Value;
pub use xxhash::{Builder, XxHashBucketizer};

use core::any::Any;

/// A bucketizer deterministically maps values to the index of one of its
/// buckets.
pub trait Bucketizer {
    /// Resolve raw bytes to a bucket index.
    fn bucket_bytes(&self, value: &[u8]) -> Result<usize, Error>;

    /// Resolve any value that converts into a `Value`: byte slices, strings,
    /// integers and floats.
    fn bucket<'a, V: Into<Value<'a>>>(&self, value: V) -> Result<usize, Error> {
        self.bucket_bytes(&value.into().to_bytes())
    }

    /// Resolve a value whose type is only known at runtime. Types that cannot
    /// be converted return `Error::UnsupportedType`.
    fn bucket_any<T: Any>(&self, value: &T) -> Result<usize, Error> {
        self.bucket(Value::from_any(value)?)
    }
}
