//! Structural properties every alignment must satisfy, checked over random
//! inputs large enough that the recursive oracle is out of reach.

use proptest::prelude::*;
use tri_align::{align3, Alignment, GAP};

fn strip_gaps(row: &[u8]) -> Vec<u8> {
    row.iter().copied().filter(|&b| b != GAP).collect()
}

fn assert_well_formed(aln: &Alignment, s1: &[u8], s2: &[u8], s3: &[u8]) {
    let [r1, r2, r3] = &aln.rows;
    assert_eq!(r1.len(), r2.len());
    assert_eq!(r2.len(), r3.len());
    assert_eq!(strip_gaps(r1), s1);
    assert_eq!(strip_gaps(r2), s2);
    assert_eq!(strip_gaps(r3), s3);
    for col in 0..r1.len() {
        assert!(
            r1[col] != GAP || r2[col] != GAP || r3[col] != GAP,
            "all-gap column at {col}"
        );
    }
}

proptest! {
    #[test]
    fn round_trip_and_no_all_gap_column(
        a in "[ACGT]{0,12}",
        b in "[ACGT]{0,12}",
        c in "[ACGT]{0,12}",
    ) {
        let aln = align3(a.as_bytes(), b.as_bytes(), c.as_bytes()).unwrap();
        assert_well_formed(&aln, a.as_bytes(), b.as_bytes(), c.as_bytes());
    }

    #[test]
    fn identical_inputs_align_gapless(x in "[ACGT]{1,12}") {
        let s = x.as_bytes();
        let aln = align3(s, s, s).unwrap();
        prop_assert_eq!(aln.score, 2 * s.len() as u32);
        prop_assert_eq!(&aln.rows[0], &s.to_vec());
        prop_assert_eq!(&aln.rows[1], &s.to_vec());
        prop_assert_eq!(&aln.rows[2], &s.to_vec());
    }

    #[test]
    fn appending_never_decreases_score(
        a in "[ACGT]{0,8}",
        b in "[ACGT]{0,8}",
        c in "[ACGT]{0,8}",
        extra in 0usize..4,
    ) {
        let base = align3(a.as_bytes(), b.as_bytes(), c.as_bytes()).unwrap().score;
        let mut longer = a.clone().into_bytes();
        longer.push(b"ACGT"[extra]);
        let extended = align3(&longer, b.as_bytes(), c.as_bytes()).unwrap().score;
        prop_assert!(extended >= base, "score dropped from {base} to {extended}");
    }

    #[test]
    fn score_is_symmetric_under_input_rotation(
        a in "[ACGT]{0,6}",
        b in "[ACGT]{0,6}",
        c in "[ACGT]{0,6}",
    ) {
        // The scoring scheme treats the three sequences symmetrically, so
        // rotating the inputs must not change the optimal score.
        let s1 = a.as_bytes();
        let s2 = b.as_bytes();
        let s3 = c.as_bytes();
        let original = align3(s1, s2, s3).unwrap().score;
        prop_assert_eq!(align3(s2, s3, s1).unwrap().score, original);
        prop_assert_eq!(align3(s3, s1, s2).unwrap().score, original);
    }
}

#[cfg(feature = "heavy")]
mod heavy {
    use super::assert_well_formed;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use tri_align::align3;

    fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
        const ALPHABET: &[u8] = b"ACGT";
        (0..len)
            .map(|_| {
                let idx = rng.gen_range(0..ALPHABET.len());
                ALPHABET[idx]
            })
            .collect()
    }

    #[test]
    fn heavy_stress_medium_cube() {
        let mut rng = StdRng::seed_from_u64(7);
        let s1 = random_dna(&mut rng, 160);
        let s2 = random_dna(&mut rng, 150);
        let s3 = random_dna(&mut rng, 140);
        let aln = align3(&s1, &s2, &s3).unwrap();
        assert_well_formed(&aln, &s1, &s2, &s3);
        assert!(aln.score <= 2 * 140);
    }
}
