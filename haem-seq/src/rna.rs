//! IUPAC RNA bases.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use haem_core::{HaemError, Result, Unordered};

use crate::alphabet::{Monomer, RnaAlphabet};
use crate::dna::DnaBase;
use crate::iupac;

/// An RNA base or IUPAC ambiguity code.
///
/// Shares its mask layout with [`DnaBase`]: the uracil bit sits where the
/// thymine bit does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RnaBase {
    Adenine = iupac::A,
    Cytosine = iupac::C,
    Guanine = iupac::G,
    Uracil = iupac::T,
    AdenineCytosine = iupac::A | iupac::C,
    AdenineGuanine = iupac::A | iupac::G,
    AdenineUracil = iupac::A | iupac::T,
    CytosineGuanine = iupac::C | iupac::G,
    CytosineUracil = iupac::C | iupac::T,
    GuanineUracil = iupac::G | iupac::T,
    AdenineCytosineGuanine = iupac::A | iupac::C | iupac::G,
    AdenineCytosineUracil = iupac::A | iupac::C | iupac::T,
    AdenineGuanineUracil = iupac::A | iupac::G | iupac::T,
    CytosineGuanineUracil = iupac::C | iupac::G | iupac::T,
    Any = iupac::ANY,
    Gap = iupac::GAP,
}

impl RnaBase {
    /// Every RNA code, exact bases first.
    pub const ALL: [RnaBase; 16] = [
        RnaBase::Adenine,
        RnaBase::Cytosine,
        RnaBase::Guanine,
        RnaBase::Uracil,
        RnaBase::AdenineCytosine,
        RnaBase::AdenineGuanine,
        RnaBase::AdenineUracil,
        RnaBase::CytosineGuanine,
        RnaBase::CytosineUracil,
        RnaBase::GuanineUracil,
        RnaBase::AdenineCytosineGuanine,
        RnaBase::AdenineCytosineUracil,
        RnaBase::AdenineGuanineUracil,
        RnaBase::CytosineGuanineUracil,
        RnaBase::Any,
        RnaBase::Gap,
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

    fn from_algebra(mask: u8) -> Self {
        debug_assert!(iupac::is_valid(mask), "mask {mask:#07b} is not an RNA code");
        Self::from_mask(mask).unwrap_or(RnaBase::Gap)
    }

    /// Watson-Crick complement (A↔U, C↔G), applied to every monomer bit.
    pub fn complement(self) -> Self {
        Self::from_algebra(iupac::complement(self.mask()))
    }

    /// RNA → DNA: uracil becomes thymine, everything else is kept.
    ///
    /// Exact inverse of [`DnaBase::transcribe`].
    pub fn retro_transcribe(self) -> DnaBase {
        match DnaBase::from_mask(self.mask()) {
            Some(base) => base,
            None => DnaBase::Gap,
        }
    }

    /// Whether this is the gap code.
    pub fn is_gap(self) -> bool {
        self == RnaBase::Gap
    }

    /// Whether this code stands for more than one base.
    pub fn is_ambiguous(self) -> bool {
        iupac::is_ambiguous(self.mask())
    }

    /// The exact bases this code stands for, in A, C, G, U order.
    ///
    /// Empty for the gap.
    pub fn monomers(self) -> impl Iterator<Item = RnaBase> {
        iupac::monomer_bits(self.mask()).map(Self::from_algebra)
    }
}

/// `!base` is the complement.
impl Not for RnaBase {
    type Output = RnaBase;

    fn not(self) -> RnaBase {
        self.complement()
    }
}

impl Monomer for RnaBase {
    const ALPHABET: &'static str = "RNA";

    fn from_code(code: char) -> Result<Self> {
        Ok(match code {
            'A' => RnaBase::Adenine,
            'C' => RnaBase::Cytosine,
            'G' => RnaBase::Guanine,
            'U' => RnaBase::Uracil,
            'M' => RnaBase::AdenineCytosine,
            'R' => RnaBase::AdenineGuanine,
            'W' => RnaBase::AdenineUracil,
            'S' => RnaBase::CytosineGuanine,
            'Y' => RnaBase::CytosineUracil,
            'K' => RnaBase::GuanineUracil,
            'V' => RnaBase::AdenineCytosineGuanine,
            'H' => RnaBase::AdenineCytosineUracil,
            'D' => RnaBase::AdenineGuanineUracil,
            'B' => RnaBase::CytosineGuanineUracil,
            'N' => RnaBase::Any,
            '.' | '-' => RnaBase::Gap,
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
            RnaBase::Adenine => 'A',
            RnaBase::Cytosine => 'C',
            RnaBase::Guanine => 'G',
            RnaBase::Uracil => 'U',
            RnaBase::AdenineCytosine => 'M',
            RnaBase::AdenineGuanine => 'R',
            RnaBase::AdenineUracil => 'W',
            RnaBase::CytosineGuanine => 'S',
            RnaBase::CytosineUracil => 'Y',
            RnaBase::GuanineUracil => 'K',
            RnaBase::AdenineCytosineGuanine => 'V',
            RnaBase::AdenineCytosineUracil => 'H',
            RnaBase::AdenineGuanineUracil => 'D',
            RnaBase::CytosineGuanineUracil => 'B',
            RnaBase::Any => 'N',
            RnaBase::Gap => '-',
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RnaBase::Adenine => "adenine",
            RnaBase::Cytosine => "cytosine",
            RnaBase::Guanine => "guanine",
            RnaBase::Uracil => "uracil",
            RnaBase::AdenineCytosine => "adenine/cytosine",
            RnaBase::AdenineGuanine => "adenine/guanine",
            RnaBase::AdenineUracil => "adenine/uracil",
            RnaBase::CytosineGuanine => "cytosine/guanine",
            RnaBase::CytosineUracil => "cytosine/uracil",
            RnaBase::GuanineUracil => "guanine/uracil",
            RnaBase::AdenineCytosineGuanine => "adenine/cytosine/guanine",
            RnaBase::AdenineCytosineUracil => "adenine/cytosine/uracil",
            RnaBase::AdenineGuanineUracil => "adenine/guanine/uracil",
            RnaBase::CytosineGuanineUracil => "cytosine/guanine/uracil",
            RnaBase::Any => "any",
            RnaBase::Gap => "gap",
        }
    }

    fn is_truthy(&self) -> bool {
        !self.is_gap()
    }
}

impl Unordered for RnaBase {
    const TYPE_NAME: &'static str = "RNABase";
}

impl TryFrom<char> for RnaBase {
    type Error = HaemError;

    fn try_from(code: char) -> Result<Self> {
        Self::from_code(code)
    }
}

impl From<RnaBase> for char {
    fn from(base: RnaBase) -> char {
        base.code()
    }
}

impl FromStr for RnaBase {
    type Err = HaemError;

    fn from_str(text: &str) -> Result<Self> {
        Self::decode(text)
    }
}

impl fmt::Display for RnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

crate::seq::monomer_ops!(RnaBase, RnaAlphabet);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RnaSequence;
    use haem_core::CompareOp;

    #[test]
    fn decode_exact_and_gap() {
        assert_eq!(RnaBase::decode("U"), Ok(RnaBase::Uracil));
        assert_eq!(RnaBase::decode("Y"), Ok(RnaBase::CytosineUracil));
        assert_eq!(RnaBase::decode("."), Ok(RnaBase::Gap));
        assert_eq!(RnaBase::decode("-"), Ok(RnaBase::Gap));
    }

    #[test]
    fn decode_invalid() {
        assert_eq!(
            RnaBase::decode("T").unwrap_err().to_string(),
            "invalid IUPAC RNA code \"T\""
        );
        assert_eq!(
            RnaBase::decode("").unwrap_err().to_string(),
            "expected a string of length 1"
        );
    }

    #[test]
    fn codes_round_trip() {
        for base in RnaBase::ALL {
            assert_eq!(RnaBase::decode(&base.encode()), Ok(base));
        }
        for code in "ACGUMRWSYKVHDBN-".chars() {
            assert_eq!(RnaBase::from_code(code).map(|b| b.code()), Ok(code));
        }
    }

    #[test]
    fn complement_pairs() {
        assert_eq!(RnaBase::Adenine.complement(), RnaBase::Uracil);
        assert_eq!(RnaBase::Uracil.complement(), RnaBase::Adenine);
        assert_eq!(RnaBase::Cytosine.complement(), RnaBase::Guanine);
        assert_eq!(RnaBase::AdenineGuanine.complement(), RnaBase::CytosineUracil);
        assert_eq!(
            RnaBase::AdenineCytosineUracil.complement(),
            RnaBase::AdenineGuanineUracil
        );
        assert_eq!(RnaBase::Any.complement(), RnaBase::Any);
        assert_eq!(RnaBase::Gap.complement(), RnaBase::Gap);
        assert_eq!(!RnaBase::Adenine, RnaBase::Uracil);
        assert_eq!(!!RnaBase::CytosineUracil, RnaBase::CytosineUracil);
    }

    #[test]
    fn retro_transcription() {
        assert_eq!(RnaBase::Uracil.retro_transcribe(), DnaBase::Thymine);
        assert_eq!(RnaBase::GuanineUracil.retro_transcribe(), DnaBase::GuanineThymine);
        for base in RnaBase::ALL {
            assert_eq!(base.retro_transcribe().transcribe(), base);
        }
    }

    #[test]
    fn display_is_name() {
        assert_eq!(RnaBase::Uracil.to_string(), "uracil");
        assert_eq!(RnaBase::AdenineUracil.to_string(), "adenine/uracil");
    }

    #[test]
    fn equality_only() {
        assert_eq!(RnaBase::Guanine.compare(&RnaBase::Guanine, CompareOp::Ne), Ok(false));
        for op in [CompareOp::Lt, CompareOp::Le, CompareOp::Gt, CompareOp::Ge] {
            assert!(RnaBase::Guanine.compare(&RnaBase::Adenine, op).is_err());
        }
    }

    #[test]
    fn gap_is_falsy() {
        assert!(!RnaBase::Gap.is_truthy());
        assert!(RnaBase::Uracil.is_truthy());
    }

    #[test]
    fn add_forms_sequences() {
        assert_eq!(
            RnaBase::Guanine + &RnaSequence::new("A-").unwrap(),
            RnaSequence::new("GA-").unwrap()
        );
        assert_eq!(RnaBase::Guanine + RnaBase::Uracil, RnaSequence::new("GU").unwrap());
    }
}
