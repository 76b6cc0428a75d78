//! Slice samplers producing randomized positive and negative index windows
//! around a labeled target span.
//!
//! Both core functions are pure apart from consuming entropy from the
//! caller's RNG: no shared state, no I/O. Concurrent callers should use one
//! generator per thread.

use rand::Rng;
use tracing::{debug, warn};

use crate::config::SamplerConfig;
use crate::constants::sampler::{DRAW_ATTEMPTS_PER_SAMPLE, NO_SPAN_INDEX};
use crate::data::Span;
use crate::errors::SamplerError;
use crate::types::{Index, SampleSet, SeqLength};

#[derive(Debug, Clone)]
/// Small deterministic RNG used for reproducible sampler behavior.
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Restores a generator from a previously captured state word.
    pub fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Current state word, suitable for persistence and later restore.
    pub fn state(&self) -> u64 {
        self.state
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl rand::RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Uniform integer in the closed interval `[low, high]`.
/// An empty interval fails fast rather than clamping.
fn draw_inclusive<R: Rng + ?Sized>(
    rng: &mut R,
    low: Index,
    high: Index,
) -> Result<Index, SamplerError> {
    if low > high {
        return Err(SamplerError::EmptyDrawRange { low, high });
    }
    Ok(rng.random_range(low..=high))
}

/// Returns `n` randomized spans that each fully contain the target span
/// `[start_idx, end_idx]`, with length in `[end_idx - start_idx + 1,
/// max_length]` counting both endpoints.
///
/// A sentinel target (`-1, -1`) yields an empty set, as does a target
/// longer than `max_length` (logged as a warning; the caller simply gets
/// no augmentation for that instance). Duplicate spans across draws are
/// allowed.
pub fn generate_positive_slices<R: Rng + ?Sized>(
    rng: &mut R,
    start_idx: Index,
    end_idx: Index,
    n: usize,
    max_length: Index,
) -> Result<SampleSet, SamplerError> {
    if start_idx == NO_SPAN_INDEX && end_idx == NO_SPAN_INDEX {
        return Ok(Vec::new());
    }
    let slice_length = end_idx - start_idx + 1;
    if slice_length > max_length {
        warn!(
            start_idx,
            end_idx,
            max_length,
            "target span longer than max_length; skipping positive slices"
        );
        return Ok(Vec::new());
    }

    let mut pairs = Vec::with_capacity(n);
    for _ in 0..n {
        // Low enough that a max_length window still reaches end_idx,
        // never past the target's own start.
        let min_start = 0.max(end_idx - max_length + 1);
        let start = draw_inclusive(rng, min_start, start_idx)?;

        let max_end = (start + max_length - 1).max(start + slice_length - 1);
        let end = draw_inclusive(rng, end_idx, max_end)?;

        pairs.push(Span { start, end });
    }
    Ok(pairs)
}

/// Returns `n` randomized spans within `[0, length]` that never overlap the
/// target span `[start_idx, end_idx]`, each with `end - start` in
/// `[min_length, max_length)`.
///
/// A sentinel target (`-1, -1`) places spans anywhere in the sequence, with
/// `end - start` in `[min_length, max_length]` (this path's bounds are both
/// inclusive). When a target exists it must satisfy
/// `0 <= start_idx <= end_idx <= length`, and candidates are drawn from a
/// fair coin between the region before the target and the region after it,
/// retrying until `n` are accepted or the attempt budget runs out.
pub fn generate_negative_slices<R: Rng + ?Sized>(
    rng: &mut R,
    start_idx: Index,
    end_idx: Index,
    length: SeqLength,
    n: usize,
    min_length: Index,
    max_length: Index,
) -> Result<SampleSet, SamplerError> {
    if start_idx == NO_SPAN_INDEX && end_idx == NO_SPAN_INDEX {
        let mut pairs = Vec::with_capacity(n);
        for _ in 0..n {
            let start = draw_inclusive(rng, 0, (length - max_length).max(1))?;
            let offset = draw_inclusive(rng, min_length, max_length)?;
            pairs.push(Span {
                start,
                end: start + offset,
            });
        }
        return Ok(pairs);
    }

    if !(0 <= start_idx && start_idx <= end_idx && end_idx <= length) {
        return Err(SamplerError::InvalidTarget {
            start_idx,
            end_idx,
            length,
        });
    }

    if start_idx < min_length + 1 && length - end_idx < min_length + 1 {
        debug!(
            start_idx,
            end_idx,
            length,
            min_length,
            "no room for negative slices on either side of the target"
        );
        return Ok(Vec::new());
    }

    let mut pairs: SampleSet = Vec::with_capacity(n);
    let attempt_budget = n.max(1) * DRAW_ATTEMPTS_PER_SAMPLE;
    let mut attempts = 0usize;
    while pairs.len() != n {
        if attempts == attempt_budget {
            return Err(SamplerError::Exhausted {
                attempts,
                accepted: pairs.len(),
                requested: n,
            });
        }
        attempts += 1;

        let prefer_before = rng.random_bool(0.5);
        let span = if prefer_before && start_idx > min_length {
            let start = draw_inclusive(rng, 0, start_idx - min_length - 1)?;
            let max_end = (start + max_length - 1).min(start_idx - 1);
            let end = draw_inclusive(rng, start + min_length, max_end)?;
            Span { start, end }
        } else if min_length < length - end_idx - 1 {
            let start = draw_inclusive(rng, end_idx + 1, length - 1 - min_length)?;
            // Capping at start + max_length - 1 keeps the accepted offset
            // strictly below max_length.
            let max_end = (start + max_length - 1).min(length - 1);
            let end = draw_inclusive(rng, start + min_length, max_end)?;
            Span { start, end }
        } else {
            // Neither side has room this attempt; the coin falls through to
            // the other side next time around.
            continue;
        };

        // Sanity check, not a filter: a violation is a logic defect.
        if !(min_length <= span.offset_len() && span.offset_len() < max_length) {
            return Err(SamplerError::LengthInvariant {
                start: span.start,
                end: span.end,
                min_length,
                max_length,
            });
        }
        pairs.push(span);
    }
    Ok(pairs)
}

/// Sampler that draws positive and negative slices with a seeded RNG and
/// configured counts and length bounds.
///
/// Thin stateful wrapper over the free functions for callers that generate
/// augmented windows once per labeled instance.
pub struct SliceSampler {
    config: SamplerConfig,
    rng: DeterministicRng,
}

impl SliceSampler {
    /// Creates a sampler whose RNG is seeded from the configuration.
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            rng: DeterministicRng::new(config.seed),
            config,
        }
    }

    /// Restores a sampler mid-stream from a captured RNG state word.
    pub fn with_rng_state(config: SamplerConfig, state: u64) -> Self {
        Self {
            rng: DeterministicRng::from_state(state),
            config,
        }
    }

    /// Configured counts and bounds.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Current RNG state word, suitable for persistence.
    pub fn rng_state(&self) -> u64 {
        self.rng.state()
    }

    /// Positive slices around the target, `positive_samples` at a time.
    pub fn positive_slices(
        &mut self,
        start_idx: Index,
        end_idx: Index,
    ) -> Result<SampleSet, SamplerError> {
        generate_positive_slices(
            &mut self.rng,
            start_idx,
            end_idx,
            self.config.positive_samples,
            self.config.max_length,
        )
    }

    /// Negative slices avoiding the target, `negative_samples` at a time.
    pub fn negative_slices(
        &mut self,
        start_idx: Index,
        end_idx: Index,
        length: SeqLength,
    ) -> Result<SampleSet, SamplerError> {
        generate_negative_slices(
            &mut self.rng,
            start_idx,
            end_idx,
            length,
            self.config.negative_samples,
            self.config.min_length,
            self.config.max_length,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_rng_replays_from_state() {
        let mut first = DeterministicRng::new(99);
        let _ = first.next_u64_internal();
        let mut resumed = DeterministicRng::from_state(first.state());
        let mut original = first.clone();
        assert_eq!(original.next_u64_internal(), resumed.next_u64_internal());
    }

    #[test]
    fn positive_sentinel_target_yields_empty_set() {
        let mut rng = DeterministicRng::new(1);
        let slices = generate_positive_slices(&mut rng, -1, -1, 8, 10).expect("sentinel");
        assert!(slices.is_empty());
    }

    #[test]
    fn positive_oversized_target_yields_empty_set() {
        let mut rng = DeterministicRng::new(1);
        let slices = generate_positive_slices(&mut rng, 5, 40, 3, 10).expect("oversized");
        assert!(slices.is_empty());
    }

    #[test]
    fn positive_malformed_target_fails_fast() {
        // start_idx below zero without being the sentinel makes the start
        // draw range empty.
        let mut rng = DeterministicRng::new(1);
        let result = generate_positive_slices(&mut rng, -3, 5, 1, 10);
        assert!(matches!(result, Err(SamplerError::EmptyDrawRange { .. })));
    }

    #[test]
    fn negative_rejects_inverted_target() {
        let mut rng = DeterministicRng::new(1);
        let result = generate_negative_slices(&mut rng, 9, 3, 100, 1, 2, 5);
        assert!(matches!(
            result,
            Err(SamplerError::InvalidTarget {
                start_idx: 9,
                end_idx: 3,
                ..
            })
        ));
    }

    #[test]
    fn negative_rejects_target_past_sequence_end() {
        let mut rng = DeterministicRng::new(1);
        let result = generate_negative_slices(&mut rng, 10, 120, 100, 1, 2, 5);
        assert!(matches!(result, Err(SamplerError::InvalidTarget { .. })));
    }

    #[test]
    fn negative_equal_length_bounds_fail_fast() {
        // With min_length == max_length no end draw can satisfy the strict
        // upper bound, so the first candidate trips the empty-range check.
        let mut rng = DeterministicRng::new(1);
        let result = generate_negative_slices(&mut rng, 10, 12, 30, 1, 3, 3);
        assert!(matches!(result, Err(SamplerError::EmptyDrawRange { .. })));
    }

    #[test]
    fn negative_exhausts_when_neither_branch_has_room() {
        // Room check passes (length - end_idx == min_length + 1) but both
        // branch guards reject every attempt, so the budget runs out.
        let mut rng = DeterministicRng::new(1);
        let result = generate_negative_slices(&mut rng, 2, 6, 10, 1, 3, 6);
        assert!(matches!(
            result,
            Err(SamplerError::Exhausted {
                accepted: 0,
                requested: 1,
                ..
            })
        ));
    }

    #[test]
    fn slice_sampler_uses_configured_counts() {
        let config = SamplerConfig {
            seed: 7,
            positive_samples: 3,
            negative_samples: 5,
            min_length: 2,
            max_length: 16,
        };
        let mut sampler = SliceSampler::new(config);
        let positives = sampler.positive_slices(30, 34).expect("positives");
        assert_eq!(positives.len(), 3);
        let negatives = sampler.negative_slices(30, 34, 200).expect("negatives");
        assert_eq!(negatives.len(), 5);
    }

    #[test]
    fn slice_sampler_state_round_trips() {
        let config = SamplerConfig::default();
        let mut sampler = SliceSampler::new(config.clone());
        let _ = sampler.positive_slices(10, 12).expect("warmup");
        let state = sampler.rng_state();

        let mut resumed = SliceSampler::with_rng_state(config, state);
        let expected = sampler.positive_slices(10, 12).expect("original");
        let replayed = resumed.positive_slices(10, 12).expect("resumed");
        assert_eq!(expected, replayed);
    }
}
