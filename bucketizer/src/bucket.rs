/// A named partition. The weight sets its share of assignments relative to the
/// other buckets in the same set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    pub(crate) name: String,
    pub(crate) weight: u32,
}

impl Bucket {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl<S: Into<String>> From<(S, u32)> for Bucket {
    fn from((name, weight): (S, u32)) -> Self {
        Self::new(name, weight)
    }
}
