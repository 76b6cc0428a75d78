use serde::{Deserialize, Serialize};

pub use crate::types::Index;

/// Inclusive index range `[start, end]` within a sequence.
///
/// Spans are created fresh on each sampling call and have no persistent
/// identity; callers turn them into data slices and discard them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// First index covered by the span.
    pub start: Index,
    /// Last index covered by the span.
    pub end: Index,
}

impl Span {
    /// Number of indices covered, counting both endpoints.
    ///
    /// This is the positive sampler's length convention.
    pub fn inclusive_len(&self) -> Index {
        self.end - self.start + 1
    }

    /// Distance between the endpoints (`end - start`).
    ///
    /// This is the negative sampler's length convention; the two
    /// conventions differ by one and are kept distinct on purpose.
    pub fn offset_len(&self) -> Index {
        self.end - self.start
    }

    /// True when `other` lies entirely within this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when this span shares at least one index with `other`.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
