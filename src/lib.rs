//! Optimal 3-way global sequence alignment.
//!
//! This crate computes the optimal alignment of three byte sequences under a
//! fixed equality-based scoring scheme (pairwise agreement = 1, three-way
//! agreement = 2, gaps free) and reconstructs one optimal gapped alignment
//! achieving that score.
//!
//! ## How it works
//! 1. [`build_tables`] fills a cubic score table over all prefix triples,
//!    recording in a parallel decision table which of the seven recurrence
//!    moves won each cell (ties resolve by a fixed preference order).
//! 2. [`traceback`] walks the decisions from the far corner back to the
//!    origin, emitting one alignment column per move.
//!
//! [`align3`] runs both phases and is the entry point for most callers. Time
//! and space are cubic in the sequence lengths; the full cube is
//! materialized, so keep inputs in the low thousands per sequence.
//!
//! ## Quick start
//! ```
//! use tri_align::align3;
//!
//! let aln = align3(b"AATCA", b"AATCG", b"ATCA").unwrap();
//! assert_eq!(aln.score, 8);
//! println!("{aln}");
//! ```
//!
//! ## Features
//! - `parallel`: adds [`build_tables_parallel`], which scores anti-diagonal
//!   wavefronts of the cube with rayon and produces identical tables.
//! - `tracing`: emits trace spans around the fill phases.
//!
//! The [`oracle`] module holds a brute-force recursive scorer used as a
//! correctness baseline in the test suite; its cost is combinatorial, so it
//! is not part of any production path.

pub mod align;
pub mod builder;
pub mod cube;
pub mod error;
pub mod moves;
pub mod oracle;
pub mod scoring;
pub mod traceback;

pub use crate::align::{align3, Alignment};
#[cfg(feature = "parallel")]
pub use crate::builder::build_tables_parallel;
pub use crate::builder::{build_tables, AlignTables, MAX_TABLE_CELLS};
pub use crate::cube::Cube;
pub use crate::error::AlignError;
pub use crate::moves::Move;
pub use crate::traceback::{traceback, GAP};
