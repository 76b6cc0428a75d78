use crate::data::Span;

/// Signed position within a sequence.
/// The value `-1` is reserved for the "no target span" sentinel; all other
/// valid positions are non-negative.
pub type Index = i64;
/// Total length of a sequence, in positions.
/// Example: `512` for a tokenized context of 512 positions.
pub type SeqLength = i64;
/// Ordered collection of generated spans.
/// Exactly `n` spans on a successful sampling call, or empty when the
/// request is infeasible; never partial on the `Ok` path.
pub type SampleSet = Vec<Span>;
