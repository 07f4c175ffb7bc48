//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] pairs an identifier with a `Vec<u8>` parameterized by
//! an [`Alphabet`] marker type. Construction uppercases and validates every
//! byte, and [`ValidatedSeq::mutate`] re-checks the alphabet, so the data is
//! always a valid uppercase member of `A`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use lista_core::{Annotated, ListaError, Result, Sequence, Summarizable};

use crate::alphabet::Alphabet;

/// A validated, named biological sequence parameterized by its alphabet.
///
/// `ValidatedSeq<DnaAlphabet>` is a DNA sequence, `ValidatedSeq<RnaAlphabet>`
/// is RNA, etc.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    id: String,
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from an identifier and raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the alphabet.
    /// Empty input is accepted.
    pub fn new(id: impl Into<String>, bytes: impl AsRef<[u8]>) -> Result<Self> {
        let data: Vec<u8> = bytes
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        if let Some(i) = data.iter().position(|&b| !A::is_valid(b)) {
            return Err(invalid_byte::<A>(data[i], Some(i)));
        }
        Ok(Self::from_validated(id.into(), data))
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee all bytes are valid uppercase members of `A`.
    pub(crate) fn from_validated(id: String, data: Vec<u8>) -> Self {
        Self {
            id,
            data,
            _alphabet: PhantomData,
        }
    }

    /// The sequence identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render as a single FASTA record: `>` + identifier, newline, data.
    pub fn to_fasta(&self) -> String {
        format!(">{}\n{}", self.id, self.as_str())
    }

    /// Replace the byte at `position` with `value`.
    ///
    /// `value` is not case-normalized. On error the sequence is left unchanged.
    ///
    /// # Errors
    ///
    /// [`ListaError::IndexOutOfRange`] if `position >= len`, and
    /// [`ListaError::InvalidArgument`] if `value` is not in the alphabet.
    pub fn mutate(&mut self, position: usize, value: u8) -> Result<()> {
        if position >= self.data.len() {
            return Err(ListaError::IndexOutOfRange {
                index: position,
                len: self.data.len(),
            });
        }
        if !A::is_valid(value) {
            return Err(invalid_byte::<A>(value, None));
        }
        self.data[position] = value;
        Ok(())
    }

    /// Start index of the first exact occurrence of `motif`.
    ///
    /// The motif is compared as-is against the uppercase data. An empty
    /// motif matches at position 0.
    pub fn find_motif(&self, motif: impl AsRef<[u8]>) -> Option<usize> {
        let motif = motif.as_ref();
        if motif.is_empty() {
            return Some(0);
        }
        self.data.windows(motif.len()).position(|w| w == motif)
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn as_str(&self) -> &str {
        std::str::from_utf8(&self.data).unwrap_or("???")
    }
}

fn invalid_byte<A: Alphabet>(b: u8, position: Option<usize>) -> ListaError {
    let msg = match position {
        Some(i) => format!(
            "invalid {} byte '{}' (0x{:02X}) at position {}",
            A::NAME,
            b as char,
            b,
            i
        ),
        None => format!(
            "byte '{}' (0x{:02X}) is not allowed in {}",
            b as char,
            b,
            A::NAME
        ),
    };
    ListaError::InvalidArgument(msg)
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Annotated for ValidatedSeq<A> {
    fn name(&self) -> &str {
        &self.id
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = std::str::from_utf8(&self.data[..preview_len]).unwrap_or("???");
        let ellipsis = if self.data.len() > 20 { "..." } else { "" };
        format!(
            "{} {} ({} residues): {}{}",
            A::NAME,
            self.id,
            self.data.len(),
            preview,
            ellipsis
        )
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}, \"{}\")", A::NAME, self.id, self.as_str())
    }
}

/// FASTA rendering, same as [`ValidatedSeq::to_fasta`].
impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.id, self.as_str())
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct SeqRef<'a> {
    id: &'a str,
    data: &'a str,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SeqOwned {
    id: String,
    data: String,
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let data = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serde::Serialize::serialize(&SeqRef { id: &self.id, data }, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = <SeqOwned as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(raw.id, raw.data.as_bytes()).map_err(serde::de::Error::custom)
    }
}
