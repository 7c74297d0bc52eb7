//! Alignment reconstruction from a completed decision table.

use crate::cube::Cube;
use crate::moves::Move;

/// Symbol emitted into an alignment row for a sequence that does not
/// contribute to a column. Inputs containing this byte are rejected by the
/// table builder.
pub const GAP: u8 = b'-';

/// Walk the decision table from `(|S1|, |S2|, |S3|)` back to the origin and
/// materialize the three gapped alignment rows.
///
/// Every move consumed pushes one column: the trailing symbol of each
/// sequence the move consumes, a gap for the rest. Columns are collected
/// back-to-front and reversed at the end. Termination is guaranteed because
/// each move decrements at least one index and the boundary tags keep a
/// valid move available whenever any index is positive.
///
/// Stripping gaps from row r reproduces sequence r exactly, and all three
/// rows have equal length.
///
/// # Panics
///
/// Panics if the decision table's dimensions do not match the sequence
/// lengths, or if a reachable cell other than the origin holds no decision.
/// Tables produced by [`crate::build_tables`] for the same sequences never
/// trigger either case.
pub fn traceback(s1: &[u8], s2: &[u8], s3: &[u8], decisions: &Cube<Option<Move>>) -> [Vec<u8>; 3] {
    let (mut i, mut j, mut k) = (s1.len(), s2.len(), s3.len());
    assert_eq!(
        decisions.dims(),
        [i + 1, j + 1, k + 1],
        "decision table does not match sequence lengths"
    );

    let max_columns = i + j + k;
    let mut rows = [
        Vec::with_capacity(max_columns),
        Vec::with_capacity(max_columns),
        Vec::with_capacity(max_columns),
    ];

    while i > 0 || j > 0 || k > 0 {
        let mv = match decisions[(i, j, k)] {
            Some(mv) => mv,
            None => panic!("no decision recorded at ({i}, {j}, {k})"),
        };
        let [di, dj, dk] = mv.steps();
        rows[0].push(if di == 1 { s1[i - 1] } else { GAP });
        rows[1].push(if dj == 1 { s2[j - 1] } else { GAP });
        rows[2].push(if dk == 1 { s3[k - 1] } else { GAP });
        i -= di;
        j -= dj;
        k -= dk;
    }

    for row in &mut rows {
        row.reverse();
    }
    rows
}
