use serde::{Deserialize, Serialize};

/// Tuning for [`crate::Reducer`]. None of these settings change the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReduceConfig {
    /// Minimum pairs in a round before it is combined on the rayon pool.
    /// Only read when the `parallel` feature is enabled.
    pub parallel_threshold: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self { parallel_threshold: 256 }
    }
}

impl ReduceConfig {
    pub fn sequential() -> Self {
        Self { parallel_threshold: usize::MAX }
    }
}
