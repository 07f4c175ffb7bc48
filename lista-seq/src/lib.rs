//! Validated biological sequences for the Lista crates.
//!
//! - **Alphabets** — [`DnaAlphabet`], [`RnaAlphabet`], [`ProteinAlphabet`]
//! - **Sequences** — [`DnaSequence`], [`RnaSequence`], [`ProteinSequence`], all
//!   aliases of the generic [`ValidatedSeq`]
//! - **Codon translation** — standard genetic code with an `X` fallback
//!
//! # Example
//!
//! ```
//! use lista_seq::{DnaSequence, Express};
//! use lista_core::Sequence;
//!
//! // Lowercase input is normalized
//! let mut dna = DnaSequence::new("DNA1", b"atgc").unwrap();
//! assert_eq!(dna.as_bytes(), b"ATGC");
//! assert_eq!(dna.to_fasta(), ">DNA1\nATGC");
//!
//! // Point mutation and motif search
//! dna.mutate(2, b'T').unwrap();
//! assert_eq!(dna.find_motif("TT"), Some(1));
//!
//! // Reverse complement
//! assert_eq!(dna.complement(), "GAAT");
//!
//! // DNA → RNA is the reverse complement in the RNA alphabet
//! let rna = dna.express();
//! assert_eq!(rna.as_bytes(), b"GAAU");
//!
//! // RNA → protein; the trailing U is an incomplete codon
//! let protein = rna.express();
//! assert_eq!(protein.as_bytes(), b"E");
//! ```

pub mod alphabet;
pub mod codon;
pub mod seq;
pub mod types;

pub use alphabet::{Alphabet, DnaAlphabet, NucleotideAlphabet, ProteinAlphabet, RnaAlphabet};

pub use seq::ValidatedSeq;

pub use types::{DnaSequence, Express, ProteinSequence, RnaSequence};

pub use codon::{translate_codon, translate_sequence};
