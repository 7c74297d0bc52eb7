//! Error type for the public alignment surface.
//!
//! The algorithm is total over finite byte sequences, so the taxonomy is
//! small: inputs that would make the output ambiguous, and table sizes we
//! refuse to allocate. Both are detected before any table is built.

use crate::traceback::GAP;

/// Errors returned by [`crate::align3`] and [`crate::build_tables`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    /// A sequence contains the reserved gap symbol, which would make it
    /// impossible to distinguish input symbols from gaps in the output.
    #[error(
        "sequence S{sequence} contains the reserved gap symbol {gap:?} at position {position}",
        gap = GAP as char
    )]
    GapSymbolInInput {
        /// 1-based sequence number (1, 2, or 3).
        sequence: usize,
        /// Byte offset of the first occurrence.
        position: usize,
    },

    /// The score table would exceed the supported cell count. The tables are
    /// cubic in the sequence lengths; rather than letting the allocator
    /// fail part-way through, the size is checked up front.
    #[error("score table of {cells} cells exceeds the supported maximum of {limit}")]
    TableTooLarge {
        /// Requested number of cells, `(|S1|+1)·(|S2|+1)·(|S3|+1)`.
        cells: u128,
        /// The cap in force, [`crate::builder::MAX_TABLE_CELLS`].
        limit: u128,
    },
}

#[cfg(test)]
mod tests {
    use super::AlignError;

    #[test]
    fn gap_symbol_message_names_sequence_and_position() {
        let err = AlignError::GapSymbolInInput {
            sequence: 2,
            position: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("S2"), "{msg}");
        assert!(msg.contains("position 4"), "{msg}");
        assert!(msg.contains('-'), "{msg}");
    }

    #[test]
    fn table_too_large_message_names_both_sizes() {
        let err = AlignError::TableTooLarge {
            cells: 1 << 40,
            limit: 1 << 32,
        };
        let msg = err.to_string();
        assert!(msg.contains(&(1u128 << 40).to_string()), "{msg}");
        assert!(msg.contains(&(1u128 << 32).to_string()), "{msg}");
    }
}
