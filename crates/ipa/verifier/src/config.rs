//! Verifier configuration

use serde::{Deserialize, Serialize};

/// Configuration for the folding verifier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldConfig {
    /// Largest accepted number of fold rounds, i.e. `log2(n)`
    pub max_rounds: usize,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self { max_rounds: 32 }
    }
}

impl FoldConfig {
    /// Largest statement size these rounds can reduce
    pub fn max_size(&self) -> usize {
        1usize.checked_shl(self.max_rounds as u32).unwrap_or(usize::MAX)
    }
}

/// Configuration for the batch verifier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Dispatch statements onto the rayon pool
    pub parallel: bool,
    /// Batches smaller than this are checked on the calling thread
    pub min_parallel_batch: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_batch: 4,
        }
    }
}

impl BatchConfig {
    /// Sequential checking on the calling thread
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

/// Configuration for both verifiers
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    pub fold: FoldConfig,
    pub batch: BatchConfig,
}
