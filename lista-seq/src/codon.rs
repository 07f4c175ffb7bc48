//! Standard genetic code (NCBI Table 1) over RNA codons.

/// Symbol emitted for the three stop codons.
pub const STOP: u8 = b'*';

/// Symbol emitted for triplets that are not RNA codons.
pub const UNKNOWN: u8 = b'X';

// Base encoding: A=0, C=1, G=2, U=3. Index = 16*first + 4*second + third.
fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

fn codon_index(codon: &[u8]) -> Option<usize> {
    match codon {
        [b1, b2, b3] => Some(base_index(*b1)? * 16 + base_index(*b2)? * 4 + base_index(*b3)?),
        _ => None,
    }
}

#[rustfmt::skip]
const STANDARD: [u8; 64] = [
    // A..
    b'K', b'N', b'K', b'N',   b'T', b'T', b'T', b'T',   b'R', b'S', b'R', b'S',   b'I', b'I', b'M', b'I',
    // C..
    b'Q', b'H', b'Q', b'H',   b'P', b'P', b'P', b'P',   b'R', b'R', b'R', b'R',   b'L', b'L', b'L', b'L',
    // G..
    b'E', b'D', b'E', b'D',   b'A', b'A', b'A', b'A',   b'G', b'G', b'G', b'G',   b'V', b'V', b'V', b'V',
    // U..
    b'*', b'Y', b'*', b'Y',   b'S', b'S', b'S', b'S',   b'*', b'C', b'W', b'C',   b'L', b'F', b'L', b'F',
];

/// Translate one codon to its amino acid letter.
///
/// Returns [`STOP`] for `UAA`, `UAG` and `UGA`, and [`UNKNOWN`] for anything
/// that is not three uppercase RNA bases.
pub fn translate_codon(codon: &[u8]) -> u8 {
    codon_index(codon).map_or(UNKNOWN, |idx| STANDARD[idx])
}

/// Check whether a codon is one of the three stop codons.
pub fn is_stop(codon: &[u8]) -> bool {
    translate_codon(codon) == STOP
}

/// Translate an RNA sequence in frame 0, stopping at the first stop codon.
///
/// The stop symbol itself is not emitted. Incomplete trailing codons are
/// ignored.
pub fn translate_sequence(seq: &[u8]) -> Vec<u8> {
    seq.chunks_exact(3)
        .map(translate_codon)
        .take_while(|&aa| aa != STOP)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_codon() {
        assert_eq!(translate_codon(b"AUG"), b'M');
    }

    #[test]
    fn stop_codons() {
        for codon in [b"UAA", b"UAG", b"UGA"] {
            assert!(is_stop(codon));
            assert_eq!(translate_codon(codon), STOP);
        }
        assert!(!is_stop(b"UGG"));
    }

    #[test]
    fn table_spot_checks() {
        let cases: [(&[u8; 3], u8); 10] = [
            (b"UUU", b'F'),
            (b"UUA", b'L'),
            (b"CUG", b'L'),
            (b"AUA", b'I'),
            (b"GUC", b'V'),
            (b"UCG", b'S'),
            (b"AGU", b'S'),
            (b"AGG", b'R'),
            (b"UGG", b'W'),
            (b"GGA", b'G'),
        ];
        for (codon, aa) in cases {
            assert_eq!(
                translate_codon(codon),
                aa,
                "{}",
                std::str::from_utf8(codon).unwrap()
            );
        }
    }

    #[test]
    fn table_has_three_stops_and_twenty_amino_acids() {
        assert_eq!(STANDARD.iter().filter(|&&aa| aa == STOP).count(), 3);
        let mut letters: Vec<u8> = STANDARD.iter().copied().filter(|&aa| aa != STOP).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters, b"ACDEFGHIKLMNPQRSTVWY".to_vec());
    }

    #[test]
    fn unknown_triplets() {
        assert_eq!(translate_codon(b"ATG"), UNKNOWN);
        assert_eq!(translate_codon(b"aug"), UNKNOWN);
        assert_eq!(translate_codon(b"AU"), UNKNOWN);
    }

    #[test]
    fn translate_stops_without_emitting_stop() {
        assert_eq!(translate_sequence(b"AUGUUUUAAGCU"), b"MF");
    }

    #[test]
    fn translate_ignores_trailing_bases() {
        assert_eq!(translate_sequence(b"GAAU"), b"E");
        assert_eq!(translate_sequence(b"AUGUUUAU"), b"MF");
        assert!(translate_sequence(b"AU").is_empty());
    }
}
