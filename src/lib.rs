#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Sampler configuration types.
pub mod config;
/// Centralized constants used across the samplers and helpers.
pub mod constants;
/// Span value type and interval predicates.
pub mod data;
/// Slice sampler implementations and public sampling API.
pub mod sampler;
/// Shared type aliases.
pub mod types;
/// Sequence padding and search helpers.
pub mod utils;

mod errors;

pub use config::SamplerConfig;
pub use data::Span;
pub use errors::SamplerError;
pub use sampler::{
    DeterministicRng, SliceSampler, generate_negative_slices, generate_positive_slices,
};
pub use types::{Index, SampleSet, SeqLength};
pub use utils::{find_value_in_list, pad_to_length};
