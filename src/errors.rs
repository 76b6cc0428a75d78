use thiserror::Error;

use crate::types::Index;

/// Error type for sampler precondition, draw-range, and invariant failures.
///
/// Recoverable conditions (an infeasible positive request, no room for a
/// negative window on either side of the target) are reported as an empty
/// `Ok` result instead; every variant here fails the call loudly.
#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("target span [{start_idx}, {end_idx}] is not within [0, {length}]")]
    InvalidTarget {
        start_idx: Index,
        end_idx: Index,
        length: Index,
    },
    #[error("uniform draw range [{low}, {high}] is empty")]
    EmptyDrawRange { low: Index, high: Index },
    #[error("accepted candidate [{start}, {end}] has length outside [{min_length}, {max_length})")]
    LengthInvariant {
        start: Index,
        end: Index,
        min_length: Index,
        max_length: Index,
    },
    #[error("gave up after {attempts} draws with {accepted} of {requested} spans accepted")]
    Exhausted {
        attempts: usize,
        accepted: usize,
        requested: usize,
    },
}
