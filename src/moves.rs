//! The seven moves of the 3-way alignment recurrence.
//!
//! Each cell of the score table is the maximum over seven candidate moves,
//! one per non-empty subset of sequences that can contribute a symbol to an
//! alignment column. Modelling them as an enum keeps the recurrence and the
//! traceback exhaustive by construction and makes the tie-break order a
//! checkable constant rather than an accident of comparison order.

/// One step of the alignment recurrence: which sequences contribute a
/// symbol to the current column (the others receive a gap).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// All three sequences contribute a symbol.
    All,
    /// S1 and S3 contribute; S2 is gapped.
    S1S3,
    /// S2 and S3 contribute; S1 is gapped.
    S2S3,
    /// S1 and S2 contribute; S3 is gapped.
    S1S2,
    /// Only S1 contributes; S2 and S3 are gapped.
    S1,
    /// Only S2 contributes; S1 and S3 are gapped.
    S2,
    /// Only S3 contributes; S1 and S2 are gapped.
    S3,
}

impl Move {
    /// Candidate moves in preference order. When several candidates tie for
    /// the maximum score, the earliest entry here wins. This order is load-
    /// bearing: alignments are only reproducible if ties resolve the same
    /// way every time.
    pub const PREFERENCE: [Move; 7] = [
        Move::All,
        Move::S1S3,
        Move::S2S3,
        Move::S1S2,
        Move::S1,
        Move::S2,
        Move::S3,
    ];

    /// Index decrements `[di, dj, dk]` into (S1, S2, S3) for this move.
    /// Each component is 0 or 1 and at least one is 1, so every move makes
    /// progress toward the origin during traceback.
    #[inline]
    pub const fn steps(self) -> [usize; 3] {
        match self {
            Move::All => [1, 1, 1],
            Move::S1S3 => [1, 0, 1],
            Move::S2S3 => [0, 1, 1],
            Move::S1S2 => [1, 1, 0],
            Move::S1 => [1, 0, 0],
            Move::S2 => [0, 1, 0],
            Move::S3 => [0, 0, 1],
        }
    }
}
