use crate::types::Index;

/// Top-level sampler configuration.
///
/// Values are plain validated integers supplied by the caller; file-based
/// configuration loading is out of scope for this crate.
#[derive(Clone, Debug)]
pub struct SamplerConfig {
    /// RNG seed that controls deterministic sampling order.
    pub seed: u64,
    /// Number of positive slices generated per labeled instance.
    pub positive_samples: usize,
    /// Number of negative slices generated per labeled instance.
    pub negative_samples: usize,
    /// Minimum negative slice length (`end - start`).
    pub min_length: Index,
    /// Maximum slice length. Caps positive slices at `end - start + 1`
    /// indices and negative slices strictly below `max_length` offsets.
    pub max_length: Index,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            positive_samples: 4,
            negative_samples: 4,
            min_length: 2,
            max_length: 64,
        }
    }
}
