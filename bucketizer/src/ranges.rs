use crate::Bucket;

/// Cumulative weight boundaries for an ordered set of buckets.
///
/// For `n` buckets this holds `n + 1` boundaries. Bucket `i` owns the half-open
/// range `[bounds[i], bounds[i + 1])` and the final boundary is the total
/// weight. A bucket with zero weight owns an empty range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Ranges {
    bounds: Box<[u64]>,
}

impl Ranges {
    pub fn new(buckets: &[Bucket]) -> Self {
        let mut bounds = Vec::with_capacity(buckets.len() + 1);
        bounds.push(0);

        let mut sum = 0_u64;
        for bucket in buckets {
            sum += bucket.weight as u64;
            bounds.push(sum);
        }

        Self {
            bounds: bounds.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_raw(bounds: Vec<u64>) -> Self {
        Self {
            bounds: bounds.into(),
        }
    }

    pub fn weight_sum(&self) -> u64 {
        self.bounds.last().copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.bounds
    }

    /// Returns the index of the bucket whose range contains `remainder`, if
    /// any. The scan is linear, bucket sets are expected to be small.
    pub fn index_of(&self, remainder: u64) -> Option<usize> {
        self.bounds
            .windows(2)
            .position(|w| w[0] <= remainder && remainder < w[1])
    }
}
