//! Similarity scorers for alignment columns.
//!
//! The scoring scheme is fixed: symbol equality is the only signal. A
//! three-way agreement is worth exactly double a single pairwise agreement
//! (2 vs 1), not triple; the recurrence in [`crate::builder`] relies on
//! these constants and they are not configurable.

/// Reward for a column in which exactly two sequences contribute a symbol.
///
/// Returns 1 if the symbols are equal, 0 otherwise.
#[inline]
pub fn pair_similarity(a: u8, b: u8) -> u32 {
    u32::from(a == b)
}

/// Reward for a column in which all three sequences contribute a symbol.
///
/// Returns 2 if all three symbols agree, 1 if exactly one pair agrees,
/// 0 if all three differ.
#[inline]
pub fn triple_similarity(a: u8, b: u8, c: u8) -> u32 {
    if a == b && b == c {
        2
    } else if a == b || b == c || a == c {
        1
    } else {
        0
    }
}
