//! Alphabet definitions for biological sequences.
//!
//! A [`Monomer`] is one closed code enumeration (a nucleotide base or an amino
//! acid). Each alphabet is a zero-sized marker type that implements
//! [`Alphabet`], tying a monomer type to the name of the sequences built from
//! it.

use std::fmt;
use std::hash::Hash;

use haem_core::{HaemError, Result, Unordered};

use crate::amino_acid::AminoAcid;
use crate::dna::DnaBase;
use crate::rna::RnaBase;

/// A single code of a closed alphabet.
///
/// Codes are plain values: `Copy`, structurally comparable, and without an
/// order.
pub trait Monomer:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Unordered + Send + Sync + 'static
{
    /// Alphabet label used in decode errors (e.g. `DNA`).
    const ALPHABET: &'static str;

    /// Decode one character.
    fn from_code(code: char) -> Result<Self>;

    /// The single-letter IUPAC code.
    fn code(&self) -> char;

    /// Full lowercase name, `/`-joined for ambiguity codes.
    fn name(&self) -> &'static str;

    /// Decode text holding exactly one code.
    fn decode(text: &str) -> Result<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ => Err(HaemError::InvalidCodeLength),
        }
    }

    /// Left inverse of [`Monomer::decode`].
    fn encode(&self) -> String {
        self.code().to_string()
    }

    /// Truth value: `false` only for the gap.
    fn is_truthy(&self) -> bool {
        true
    }
}

/// Trait for biological sequence alphabets.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// Name of the sequence type over this alphabet, used in messages.
    const SEQUENCE_NAME: &'static str;

    /// Length unit used in summaries.
    const UNIT: &'static str;

    /// The code enumeration of this alphabet.
    type Monomer: Monomer;
}

/// IUPAC DNA alphabet: `ACGTMRWSYKVHDBN` plus gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const SEQUENCE_NAME: &'static str = "DNASequence";
    const UNIT: &'static str = "bp";
    type Monomer = DnaBase;
}

/// IUPAC RNA alphabet: `ACGUMRWSYKVHDBN` plus gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const SEQUENCE_NAME: &'static str = "RNASequence";
    const UNIT: &'static str = "nt";
    type Monomer = RnaBase;
}

/// IUPAC amino acid alphabet: the 20 standard residues plus `B`, `Z`, `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AminoAcidAlphabet;

impl Alphabet for AminoAcidAlphabet {
    const NAME: &'static str = "Amino acid";
    const SEQUENCE_NAME: &'static str = "AminoAcidSequence";
    const UNIT: &'static str = "aa";
    type Monomer = AminoAcid;
}
