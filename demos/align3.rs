//! Demo: 3-way alignment of three short DNA sequences.
//!
//! Run with:
//! `cargo run --example align3`

use tri_align::align3;

fn main() {
    let s1 = b"AATCA";
    let s2 = b"AATCG";
    let s3 = b"ATCA";

    match align3(s1, s2, s3) {
        Ok(aln) => {
            println!("Optimal 3-way score: {}", aln.score);
            println!("Alignment ({} columns):", aln.columns());
            println!("{aln}");
        }
        Err(err) => {
            eprintln!("alignment failed: {err}");
            std::process::exit(1);
        }
    }
}
