//! Top-level 3-way alignment entry point.

use std::fmt;

use crate::builder::build_tables;
use crate::error::AlignError;
use crate::traceback::traceback;

/// Result of a 3-way alignment: the optimal score and one optimal set of
/// gapped rows achieving it.
///
/// The rows have equal length; stripping [`crate::GAP`] bytes from row r
/// reproduces input sequence r.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Optimal sum-of-pairs-like score over all 3-way alignments.
    pub score: u32,
    /// Gapped rows for S1, S2, S3, in input order.
    pub rows: [Vec<u8>; 3],
}

impl Alignment {
    /// Number of columns in the alignment.
    pub fn columns(&self) -> usize {
        self.rows[0].len()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

/// Compute the optimal 3-way alignment of three byte sequences.
///
/// Builds the full cubic score and decision tables, then traces the
/// recorded decisions back from the far corner to reconstruct one optimal
/// alignment. Time and space are Θ(|S1|·|S2|·|S3|); both tables live only
/// for the duration of the call.
///
/// Ties between equally scoring moves resolve deterministically (see
/// [`crate::Move::PREFERENCE`]), so identical inputs always produce the
/// identical alignment.
///
/// ```
/// use tri_align::align3;
///
/// let aln = align3(b"AATCA", b"AATCG", b"ATCA").unwrap();
/// assert_eq!(aln.score, 8);
/// assert_eq!(aln.rows[2], b"A-TCA");
/// ```
pub fn align3(s1: &[u8], s2: &[u8], s3: &[u8]) -> Result<Alignment, AlignError> {
    let tables = build_tables(s1, s2, s3)?;
    let score = tables.scores[(s1.len(), s2.len(), s3.len())];
    let rows = traceback(s1, s2, s3, &tables.decisions);
    Ok(Alignment { score, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prints_one_row_per_line() {
        let aln = align3(b"AATCA", b"AATCG", b"ATCA").unwrap();
        assert_eq!(aln.to_string(), "AATCA\nAATCG\nA-TCA");
    }

    #[test]
    fn columns_counts_alignment_length() {
        let aln = align3(b"AA", b"A", b"AAA").unwrap();
        assert_eq!(aln.columns(), 3);
    }
}
