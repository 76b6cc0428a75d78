use crate::types::Index;

/// Constants used by sampler runtime behavior.
pub mod sampler {
    use super::Index;

    /// Reserved index meaning "no target span specified".
    /// A target of `(NO_SPAN_INDEX, NO_SPAN_INDEX)` disables positive
    /// augmentation and lets negative slices land anywhere.
    pub const NO_SPAN_INDEX: Index = -1;
    /// Cap on candidate draws per requested sample before the negative
    /// sampler's rejection loop gives up with an error.
    pub const DRAW_ATTEMPTS_PER_SAMPLE: usize = 1024;
}

/// Constants used by sequence search helpers.
pub mod search {
    use super::Index;

    /// Position reported when a value is absent from a sequence.
    pub const NOT_FOUND: Index = -1;
}
