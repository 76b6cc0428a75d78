//! Sequence helpers shared by training-example builders.

use crate::constants::search::NOT_FOUND;
use crate::types::Index;

/// Position of the first occurrence of `value` in `values`, or
/// [`NOT_FOUND`](crate::constants::search::NOT_FOUND) when absent.
/// Linear scan; no ordering assumptions.
pub fn find_value_in_list<T: PartialEq>(values: &[T], value: &T) -> Index {
    values
        .iter()
        .position(|candidate| candidate == value)
        .map(|idx| idx as Index)
        .unwrap_or(NOT_FOUND)
}

/// Copy of `values` extended with `fill` until it reaches `length`.
/// Sequences already at or beyond `length` come back unchanged; nothing is
/// ever truncated.
pub fn pad_to_length<T: Clone>(values: &[T], length: usize, fill: T) -> Vec<T> {
    let mut padded = values.to_vec();
    while padded.len() < length {
        padded.push(fill.clone());
    }
    padded
}
