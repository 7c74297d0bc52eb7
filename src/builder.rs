//! DP table builder for 3-way alignment.
//!
//! Fills a cubic score table and a parallel decision table over all prefixes
//! of the three input sequences. Boundary cells (the three coordinate axes
//! and the three coordinate faces of the cube) get fixed decision tags and
//! keep score 0: with fewer than three sequences still holding symbols there
//! is nothing to compare against, so every boundary move carries reward 0.
//! Interior cells take the maximum over the seven candidate moves, with ties
//! resolved by [`Move::PREFERENCE`] order.
//!
//! The serial fill visits cells in increasing `(i, j, k)`. With the
//! `parallel` feature, [`build_tables_parallel`] instead sweeps anti-diagonal
//! wavefronts (`i + j + k` constant): every predecessor of a wavefront cell
//! lies on an earlier wavefront, so cells within one wavefront are
//! independent and safe to score concurrently. Both fills produce identical
//! tables because each cell's choice depends only on completed predecessors.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cube::Cube;
use crate::error::AlignError;
use crate::moves::Move;
use crate::scoring::{pair_similarity, triple_similarity};
use crate::traceback::GAP;

/// Upper bound on the number of cells in one table.
///
/// The tables are Θ(|S1|·|S2|·|S3|) in both time and space; this cap turns
/// a doomed allocation into an explicit [`AlignError::TableTooLarge`]
/// instead of an allocator abort part-way through.
pub const MAX_TABLE_CELLS: u128 = 1 << 32;

/// Fully populated score and decision tables for one alignment instance.
///
/// Dimensions are `[|S1|+1, |S2|+1, |S3|+1]`; cell `(i, j, k)` covers the
/// prefixes `S1[..i]`, `S2[..j]`, `S3[..k]`. The decision cube holds `None`
/// only at the origin, where traceback terminates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignTables {
    pub scores: Cube<u32>,
    pub decisions: Cube<Option<Move>>,
}

/// Build the score and decision tables for three sequences.
///
/// Rejects sequences containing the reserved gap symbol and table sizes
/// beyond [`MAX_TABLE_CELLS`]; otherwise total for any finite inputs,
/// including empty sequences (the tables degenerate to their boundary
/// cells and the terminal score is 0).
pub fn build_tables(s1: &[u8], s2: &[u8], s3: &[u8]) -> Result<AlignTables, AlignError> {
    let (mut scores, mut decisions) = alloc_tables(s1, s2, s3)?;
    init_boundaries(&mut decisions);

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!(
        "fill_interior",
        n1 = s1.len(),
        n2 = s2.len(),
        n3 = s3.len()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    for i in 1..=s1.len() {
        for j in 1..=s2.len() {
            for k in 1..=s3.len() {
                let (score, mv) = best_move(s1, s2, s3, &scores, i, j, k);
                scores[(i, j, k)] = score;
                decisions[(i, j, k)] = Some(mv);
            }
        }
    }

    Ok(AlignTables { scores, decisions })
}

/// Wavefront-parallel variant of [`build_tables`].
///
/// Sweeps the cube by anti-diagonals in increasing `i + j + k` and scores
/// the cells of each wavefront with rayon. Produces tables identical to the
/// serial fill.
#[cfg(feature = "parallel")]
pub fn build_tables_parallel(s1: &[u8], s2: &[u8], s3: &[u8]) -> Result<AlignTables, AlignError> {
    let (mut scores, mut decisions) = alloc_tables(s1, s2, s3)?;
    init_boundaries(&mut decisions);

    let (n1, n2, n3) = (s1.len(), s2.len(), s3.len());
    for sum in 3..=n1 + n2 + n3 {
        let cells = wavefront_cells(n1, n2, n3, sum);
        if cells.is_empty() {
            continue;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("score_wavefront", sum, cells = cells.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let scored: Vec<((usize, usize, usize), (u32, Move))> = cells
            .into_par_iter()
            .map(|(i, j, k)| ((i, j, k), best_move(s1, s2, s3, &scores, i, j, k)))
            .collect();

        for ((i, j, k), (score, mv)) in scored {
            scores[(i, j, k)] = score;
            decisions[(i, j, k)] = Some(mv);
        }
    }

    Ok(AlignTables { scores, decisions })
}

/// Interior cells on the wavefront `i + j + k == sum`, with all of
/// `i, j, k >= 1`.
#[cfg(feature = "parallel")]
fn wavefront_cells(n1: usize, n2: usize, n3: usize, sum: usize) -> Vec<(usize, usize, usize)> {
    let mut cells = Vec::new();
    let i_lo = 1.max(sum.saturating_sub(n2 + n3));
    let i_hi = n1.min(sum.saturating_sub(2));
    for i in i_lo..=i_hi {
        let rest = sum - i;
        let j_lo = 1.max(rest.saturating_sub(n3));
        let j_hi = n2.min(rest - 1);
        for j in j_lo..=j_hi {
            cells.push((i, j, rest - j));
        }
    }
    cells
}

fn alloc_tables(
    s1: &[u8],
    s2: &[u8],
    s3: &[u8],
) -> Result<(Cube<u32>, Cube<Option<Move>>), AlignError> {
    for (idx, seq) in [s1, s2, s3].into_iter().enumerate() {
        if let Some(pos) = seq.iter().position(|&b| b == GAP) {
            return Err(AlignError::GapSymbolInInput {
                sequence: idx + 1,
                position: pos,
            });
        }
    }

    let dims = [s1.len() + 1, s2.len() + 1, s3.len() + 1];
    let cells = dims.iter().map(|&d| d as u128).product::<u128>();
    if cells > MAX_TABLE_CELLS {
        return Err(AlignError::TableTooLarge {
            cells,
            limit: MAX_TABLE_CELLS,
        });
    }
    // The cap keeps the product comfortably inside usize range.
    let too_large = AlignError::TableTooLarge {
        cells,
        limit: MAX_TABLE_CELLS,
    };
    let scores = Cube::try_new(dims).ok_or_else(|| too_large.clone())?;
    let decisions = Cube::try_new(dims).ok_or(too_large)?;
    Ok((scores, decisions))
}

/// Assign the fixed boundary tags: axes consume one sequence, faces consume
/// two. Score cells on the boundary stay 0, so only the decision cube is
/// touched. The origin keeps `None`.
fn init_boundaries(decisions: &mut Cube<Option<Move>>) {
    let [d1, d2, d3] = decisions.dims();

    for i in 1..d1 {
        decisions[(i, 0, 0)] = Some(Move::S1);
    }
    for j in 1..d2 {
        decisions[(0, j, 0)] = Some(Move::S2);
    }
    for k in 1..d3 {
        decisions[(0, 0, k)] = Some(Move::S3);
    }

    for i in 1..d1 {
        for j in 1..d2 {
            decisions[(i, j, 0)] = Some(Move::S1S2);
        }
    }
    for j in 1..d2 {
        for k in 1..d3 {
            decisions[(0, j, k)] = Some(Move::S2S3);
        }
    }
    for i in 1..d1 {
        for k in 1..d3 {
            decisions[(i, 0, k)] = Some(Move::S1S3);
        }
    }
}

/// Score one interior cell: maximum over the seven candidate moves, ties
/// going to the earliest entry of [`Move::PREFERENCE`].
///
/// Requires `i, j, k >= 1`; only reads cells with a strictly smaller index
/// in at least one coordinate.
fn best_move(
    s1: &[u8],
    s2: &[u8],
    s3: &[u8],
    scores: &Cube<u32>,
    i: usize,
    j: usize,
    k: usize,
) -> (u32, Move) {
    let mut best: Option<(u32, Move)> = None;
    for mv in Move::PREFERENCE {
        let [di, dj, dk] = mv.steps();
        let candidate = scores[(i - di, j - dj, k - dk)] + move_reward(mv, s1, s2, s3, i, j, k);
        match best {
            Some((best_score, _)) if candidate <= best_score => {}
            _ => best = Some((candidate, mv)),
        }
    }
    // PREFERENCE is non-empty, so a move was always chosen.
    best.unwrap_or((0, Move::All))
}

/// Similarity reward a move adds at cell `(i, j, k)`: the symbols it
/// consumes are the trailing symbols of the prefixes, `S1[i-1]`, `S2[j-1]`,
/// `S3[k-1]`. Single-sequence moves pay out nothing.
fn move_reward(mv: Move, s1: &[u8], s2: &[u8], s3: &[u8], i: usize, j: usize, k: usize) -> u32 {
    match mv {
        Move::All => triple_similarity(s1[i - 1], s2[j - 1], s3[k - 1]),
        Move::S1S3 => pair_similarity(s1[i - 1], s3[k - 1]),
        Move::S2S3 => pair_similarity(s2[j - 1], s3[k - 1]),
        Move::S1S2 => pair_similarity(s1[i - 1], s2[j - 1]),
        Move::S1 | Move::S2 | Move::S3 => 0,
    }
}
