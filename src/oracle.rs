//! Reference recursive scorer for cross-validation.
//!
//! Implements the identical 7-way recurrence directly on sequence suffixes,
//! with no memoization. Its branching factor makes the cost combinatorial in
//! the sequence lengths, so it is usable only on tiny inputs (lengths up to
//! roughly 6-8 per sequence) and exists purely as a correctness baseline for
//! the table builder. It agrees with [`crate::align3`] on the optimal score
//! for every input; it says nothing about which optimal alignment the
//! traceback picks.

use crate::scoring::{pair_similarity, triple_similarity};

/// Optimal 3-way alignment score computed by brute-force recursion.
///
/// Returns 0 as soon as any sequence is exhausted, mirroring the boundary
/// scheme of the table builder where axis and face cells keep score 0.
pub fn score(s1: &[u8], s2: &[u8], s3: &[u8]) -> u32 {
    if s1.is_empty() || s2.is_empty() || s3.is_empty() {
        return 0;
    }
    let (a, b, c) = (s1.len() - 1, s2.len() - 1, s3.len() - 1);

    let candidates = [
        score(&s1[..a], &s2[..b], &s3[..c]) + triple_similarity(s1[a], s2[b], s3[c]),
        score(&s1[..a], s2, &s3[..c]) + pair_similarity(s1[a], s3[c]),
        score(s1, &s2[..b], &s3[..c]) + pair_similarity(s2[b], s3[c]),
        score(&s1[..a], &s2[..b], s3) + pair_similarity(s1[a], s2[b]),
        score(&s1[..a], s2, s3),
        score(s1, &s2[..b], s3),
        score(s1, s2, &s3[..c]),
    ];
    candidates.into_iter().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::score;

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(score(b"", b"", b""), 0);
        assert_eq!(score(b"ACGT", b"", b"ACGT"), 0);
    }

    #[test]
    fn identical_inputs_score_double_length() {
        assert_eq!(score(b"A", b"A", b"A"), 2);
        assert_eq!(score(b"ACG", b"ACG", b"ACG"), 6);
    }

    #[test]
    fn worked_example() {
        assert_eq!(score(b"AATCA", b"AATCG", b"ATCA"), 8);
    }
}
