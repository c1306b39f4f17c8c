//! IUPAC DNA bases.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use haem_core::{HaemError, Result, Unordered};

use crate::alphabet::{DnaAlphabet, Monomer};
use crate::iupac;
use crate::rna::RnaBase;

/// A DNA base or IUPAC ambiguity code.
///
/// The discriminant is the five-bit mask described in [`crate::iupac`], so
/// complement and transcription are bit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DnaBase {
    Adenine = iupac::A,
    Cytosine = iupac::C,
    Guanine = iupac::G,
    Thymine = iupac::T,
    AdenineCytosine = iupac::A | iupac::C,
    AdenineGuanine = iupac::A | iupac::G,
    AdenineThymine = iupac::A | iupac::T,
    CytosineGuanine = iupac::C | iupac::G,
    CytosineThymine = iupac::C | iupac::T,
    GuanineThymine = iupac::G | iupac::T,
    AdenineCytosineGuanine = iupac::A | iupac::C | iupac::G,
    AdenineCytosineThymine = iupac::A | iupac::C | iupac::T,
    AdenineGuanineThymine = iupac::A | iupac::G | iupac::T,
    CytosineGuanineThymine = iupac::C | iupac::G | iupac::T,
    Any = iupac::ANY,
    Gap = iupac::GAP,
}

impl DnaBase {
    /// Every DNA code, exact bases first.
    pub const ALL: [DnaBase; 16] = [
        DnaBase::Adenine,
        DnaBase::Cytosine,
        DnaBase::Guanine,
        DnaBase::Thymine,
        DnaBase::AdenineCytosine,
        DnaBase::AdenineGuanine,
        DnaBase::AdenineThymine,
        DnaBase::CytosineGuanine,
        DnaBase::CytosineThymine,
        DnaBase::GuanineThymine,
        DnaBase::AdenineCytosineGuanine,
        DnaBase::AdenineCytosineThymine,
        DnaBase::AdenineGuanineThymine,
        DnaBase::CytosineGuanineThymine,
        DnaBase::Any,
        DnaBase::Gap,
    ];

    /// The five-bit mask of this code.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// The code for a mask, if the mask is one of the 16 valid values.
    pub fn from_mask(mask: u8) -> Option<Self> {
        if !iupac::is_valid(mask) {
            return None;
        }
        Self::ALL.iter().copied().find(|base| base.mask() == mask)
    }

    // Only called with masks produced by the bit algebra, which keeps
    // valid masks valid.
    fn from_algebra(mask: u8) -> Self {
        debug_assert!(iupac::is_valid(mask), "mask {mask:#07b} is not a DNA code");
        Self::from_mask(mask).unwrap_or(DnaBase::Gap)
    }

    /// Watson-Crick complement (A↔T, C↔G), applied to every monomer bit.
    pub fn complement(self) -> Self {
        Self::from_algebra(iupac::complement(self.mask()))
    }

    /// DNA → RNA: thymine becomes uracil, everything else is kept.
    pub fn transcribe(self) -> RnaBase {
        match RnaBase::from_mask(self.mask()) {
            Some(base) => base,
            None => RnaBase::Gap,
        }
    }

    /// Whether this is the gap code.
    pub fn is_gap(self) -> bool {
        self == DnaBase::Gap
    }

    /// Whether this code stands for more than one base.
    pub fn is_ambiguous(self) -> bool {
        iupac::is_ambiguous(self.mask())
    }

    /// The exact bases this code stands for, in A, C, G, T order.
    ///
    /// Empty for the gap.
    pub fn monomers(self) -> impl Iterator<Item = DnaBase> {
        iupac::monomer_bits(self.mask()).map(Self::from_algebra)
    }
}

/// `!base` is the complement.
impl Not for DnaBase {
    type Output = DnaBase;

    fn not(self) -> DnaBase {
        self.complement()
    }
}

impl Monomer for DnaBase {
    const ALPHABET: &'static str = "DNA";

    fn from_code(code: char) -> Result<Self> {
        Ok(match code {
            'A' => DnaBase::Adenine,
            'C' => DnaBase::Cytosine,
            'G' => DnaBase::Guanine,
            'T' => DnaBase::Thymine,
            'M' => DnaBase::AdenineCytosine,
            'R' => DnaBase::AdenineGuanine,
            'W' => DnaBase::AdenineThymine,
            'S' => DnaBase::CytosineGuanine,
            'Y' => DnaBase::CytosineThymine,
            'K' => DnaBase::GuanineThymine,
            'V' => DnaBase::AdenineCytosineGuanine,
            'H' => DnaBase::AdenineCytosineThymine,
            'D' => DnaBase::AdenineGuanineThymine,
            'B' => DnaBase::CytosineGuanineThymine,
            'N' => DnaBase::Any,
            '.' | '-' => DnaBase::Gap,
            _ => {
                return Err(HaemError::InvalidCode {
                    alphabet: Self::ALPHABET,
                    code,
                })
            }
        })
    }

    fn code(&self) -> char {
        match self {
            DnaBase::Adenine => 'A',
            DnaBase::Cytosine => 'C',
            DnaBase::Guanine => 'G',
            DnaBase::Thymine => 'T',
            DnaBase::AdenineCytosine => 'M',
            DnaBase::AdenineGuanine => 'R',
            DnaBase::AdenineThymine => 'W',
            DnaBase::CytosineGuanine => 'S',
            DnaBase::CytosineThymine => 'Y',
            DnaBase::GuanineThymine => 'K',
            DnaBase::AdenineCytosineGuanine => 'V',
            DnaBase::AdenineCytosineThymine => 'H',
            DnaBase::AdenineGuanineThymine => 'D',
            DnaBase::CytosineGuanineThymine => 'B',
            DnaBase::Any => 'N',
            DnaBase::Gap => '-',
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DnaBase::Adenine => "adenine",
            DnaBase::Cytosine => "cytosine",
            DnaBase::Guanine => "guanine",
            DnaBase::Thymine => "thymine",
            DnaBase::AdenineCytosine => "adenine/cytosine",
            DnaBase::AdenineGuanine => "adenine/guanine",
            DnaBase::AdenineThymine => "adenine/thymine",
            DnaBase::CytosineGuanine => "cytosine/guanine",
            DnaBase::CytosineThymine => "cytosine/thymine",
            DnaBase::GuanineThymine => "guanine/thymine",
            DnaBase::AdenineCytosineGuanine => "adenine/cytosine/guanine",
            DnaBase::AdenineCytosineThymine => "adenine/cytosine/thymine",
            DnaBase::AdenineGuanineThymine => "adenine/guanine/thymine",
            DnaBase::CytosineGuanineThymine => "cytosine/guanine/thymine",
            DnaBase::Any => "any",
            DnaBase::Gap => "gap",
        }
    }

    fn is_truthy(&self) -> bool {
        !self.is_gap()
    }
}

impl Unordered for DnaBase {
    const TYPE_NAME: &'static str = "DNABase";
}

impl TryFrom<char> for DnaBase {
    type Error = HaemError;

    fn try_from(code: char) -> Result<Self> {
        Self::from_code(code)
    }
}

impl From<DnaBase> for char {
    fn from(base: DnaBase) -> char {
        base.code()
    }
}

impl FromStr for DnaBase {
    type Err = HaemError;

    fn from_str(text: &str) -> Result<Self> {
        Self::decode(text)
    }
}

impl fmt::Display for DnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

crate::seq::monomer_ops!(DnaBase, DnaAlphabet);
