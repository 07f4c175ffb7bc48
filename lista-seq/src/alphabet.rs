//! Alphabet definitions for biological sequence validation.
//!
//! Each alphabet is a zero-sized marker type implementing [`Alphabet`]. The
//! two nucleotide alphabets also implement [`NucleotideAlphabet`], which
//! supplies the Watson-Crick pairing used by `complement`.

/// Trait for biological sequence alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Sequence
/// constructors uppercase input first, then validate against the alphabet.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte is a member of the alphabet.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}

/// A nucleotide alphabet with a base-pairing rule.
pub trait NucleotideAlphabet: Alphabet {
    /// The base paired with `b`. Bytes outside the alphabet map to themselves.
    fn complement(b: u8) -> u8;
}

/// Unambiguous DNA alphabet: `ATGC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ATGC";
}

impl NucleotideAlphabet for DnaAlphabet {
    fn complement(b: u8) -> u8 {
        match b {
            b'A' => b'T',
            b'T' => b'A',
            b'G' => b'C',
            b'C' => b'G',
            other => other,
        }
    }
}

/// Unambiguous RNA alphabet: `AUGC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"AUGC";
}

impl NucleotideAlphabet for RnaAlphabet {
    fn complement(b: u8) -> u8 {
        match b {
            b'A' => b'U',
            b'U' => b'A',
            b'G' => b'C',
            b'C' => b'G',
            other => other,
        }
    }
}

/// The 20 standard one-letter amino acid codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "Protein";
    const VALID_BYTES: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY";
}
