//! Concrete sequence type aliases and their biological operations.
//!
//! - [`DnaSequence`] — reverse complement, transcription
//! - [`RnaSequence`] — reverse complement, translation
//! - [`ProteinSequence`] — base operations only
//!
//! [`Express`] gives DNA and RNA one shared entry point for the next step of
//! the DNA → RNA → protein chain.

use crate::alphabet::{DnaAlphabet, NucleotideAlphabet, ProteinAlphabet, RnaAlphabet};
use crate::codon;
use crate::seq::ValidatedSeq;

/// A validated DNA sequence (`ATGC`).
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence (`AUGC`).
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;

/// A validated protein sequence (20 standard amino acids).
pub type ProteinSequence = ValidatedSeq<ProteinAlphabet>;

impl<A: NucleotideAlphabet> ValidatedSeq<A> {
    /// Return the reverse complement, read 5'→3' on the opposite strand.
    pub fn complement(&self) -> String {
        self.iter().rev().map(|&b| char::from(A::complement(b))).collect()
    }
}

// A→U, T→A, G→C, C→G: the DNA partner base written in the RNA alphabet.
fn rna_partner(b: u8) -> u8 {
    match DnaAlphabet::complement(b) {
        b'T' => b'U',
        other => other,
    }
}

impl DnaSequence {
    /// Transcribe to RNA.
    ///
    /// This produces the reverse complement expressed in the RNA alphabet
    /// (A→U, T→A, G→C, C→G, then reversed), so `ATTC` becomes `GAAU`. It is
    /// *not* the coding-strand copy with T→U; callers wanting that should
    /// transcribe the reverse complement instead.
    pub fn transcribe(&self) -> RnaSequence {
        let rna: Vec<u8> = self.iter().rev().map(|&b| rna_partner(b)).collect();
        RnaSequence::from_validated(self.id().to_owned(), rna)
    }
}

impl RnaSequence {
    /// Translate to protein with the standard genetic code.
    ///
    /// Reads codons from position 0 and stops at the first stop codon.
    /// Incomplete trailing codons are ignored.
    pub fn translate(&self) -> ProteinSequence {
        let protein = codon::translate_sequence(self);
        // Every RNA triplet is a sense or stop codon, so `X` never appears.
        debug_assert!(protein.iter().all(|&aa| aa != codon::UNKNOWN));
        ProteinSequence::from_validated(self.id().to_owned(), protein)
    }
}

/// The next product along DNA → RNA → protein.
pub trait Express {
    /// The sequence type produced by this step.
    type Product;

    /// Transcribe (DNA) or translate (RNA).
    fn express(&self) -> Self::Product;
}

impl Express for DnaSequence {
    type Product = RnaSequence;

    fn express(&self) -> RnaSequence {
        self.transcribe()
    }
}

impl Express for RnaSequence {
    type Product = ProteinSequence;

    fn express(&self) -> ProteinSequence {
        self.translate()
    }
}
