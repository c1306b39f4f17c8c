//! IUPAC amino acids.

use std::fmt;
use std::str::FromStr;

use haem_core::{HaemError, Result, Unordered};

use crate::alphabet::{AminoAcidAlphabet, Monomer};
use crate::codon::{Codon, GeneticCode};

/// An amino acid or IUPAC ambiguity code.
///
/// Covers the 20 standard residues, the two-fold codes `B` (Asp/Asn) and `Z`
/// (Gln/Glu), and `X` for any residue. Stop is not an amino acid; see
/// [`Residue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AminoAcid {
    Alanine,
    AsparticAcidAsparagine,
    Cysteine,
    AsparticAcid,
    GlutamicAcid,
    Phenylalanine,
    Glycine,
    Histidine,
    Isoleucine,
    Lysine,
    Leucine,
    Methionine,
    Asparagine,
    Proline,
    Glutamine,
    Arginine,
    Serine,
    Threonine,
    Valine,
    Tryptophan,
    Any,
    Tyrosine,
    GlutamineGlutamicAcid,
}

impl AminoAcid {
    /// Every amino acid code, in one-letter order.
    pub const ALL: [AminoAcid; 23] = [
        AminoAcid::Alanine,
        AminoAcid::AsparticAcidAsparagine,
        AminoAcid::Cysteine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
        AminoAcid::Phenylalanine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Lysine,
        AminoAcid::Leucine,
        AminoAcid::Methionine,
        AminoAcid::Asparagine,
        AminoAcid::Proline,
        AminoAcid::Glutamine,
        AminoAcid::Arginine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Valine,
        AminoAcid::Tryptophan,
        AminoAcid::Any,
        AminoAcid::Tyrosine,
        AminoAcid::GlutamineGlutamicAcid,
    ];

    /// Three-letter lowercase abbreviation (`ala`, `asx`, `xaa`, ...).
    pub fn short_name(self) -> &'static str {
        match self {
            AminoAcid::Alanine => "ala",
            AminoAcid::AsparticAcidAsparagine => "asx",
            AminoAcid::Cysteine => "cys",
            AminoAcid::AsparticAcid => "asp",
            AminoAcid::GlutamicAcid => "glu",
            AminoAcid::Phenylalanine => "phe",
            AminoAcid::Glycine => "gly",
            AminoAcid::Histidine => "his",
            AminoAcid::Isoleucine => "ile",
            AminoAcid::Lysine => "lys",
            AminoAcid::Leucine => "leu",
            AminoAcid::Methionine => "met",
            AminoAcid::Asparagine => "asn",
            AminoAcid::Proline => "pro",
            AminoAcid::Glutamine => "gln",
            AminoAcid::Arginine => "arg",
            AminoAcid::Serine => "ser",
            AminoAcid::Threonine => "thr",
            AminoAcid::Valine => "val",
            AminoAcid::Tryptophan => "trp",
            AminoAcid::Any => "xaa",
            AminoAcid::Tyrosine => "tyr",
            AminoAcid::GlutamineGlutamicAcid => "glx",
        }
    }

    /// Whether this code stands for more than one residue.
    pub fn is_ambiguous(self) -> bool {
        matches!(
            self,
            AminoAcid::AsparticAcidAsparagine | AminoAcid::GlutamineGlutamicAcid | AminoAcid::Any
        )
    }
}

impl Monomer for AminoAcid {
    const ALPHABET: &'static str = "amino acid";

    fn from_code(code: char) -> Result<Self> {
        Ok(match code {
            'A' => AminoAcid::Alanine,
            'B' => AminoAcid::AsparticAcidAsparagine,
            'C' => AminoAcid::Cysteine,
            'D' => AminoAcid::AsparticAcid,
            'E' => AminoAcid::GlutamicAcid,
            'F' => AminoAcid::Phenylalanine,
            'G' => AminoAcid::Glycine,
            'H' => AminoAcid::Histidine,
            'I' => AminoAcid::Isoleucine,
            'K' => AminoAcid::Lysine,
            'L' => AminoAcid::Leucine,
            'M' => AminoAcid::Methionine,
            'N' => AminoAcid::Asparagine,
            'P' => AminoAcid::Proline,
            'Q' => AminoAcid::Glutamine,
            'R' => AminoAcid::Arginine,
            'S' => AminoAcid::Serine,
            'T' => AminoAcid::Threonine,
            'V' => AminoAcid::Valine,
            'W' => AminoAcid::Tryptophan,
            'X' => AminoAcid::Any,
            'Y' => AminoAcid::Tyrosine,
            'Z' => AminoAcid::GlutamineGlutamicAcid,
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
            AminoAcid::Alanine => 'A',
            AminoAcid::AsparticAcidAsparagine => 'B',
            AminoAcid::Cysteine => 'C',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Lysine => 'K',
            AminoAcid::Leucine => 'L',
            AminoAcid::Methionine => 'M',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Proline => 'P',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Arginine => 'R',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Valine => 'V',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Any => 'X',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::GlutamineGlutamicAcid => 'Z',
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AminoAcid::Alanine => "alanine",
            AminoAcid::AsparticAcidAsparagine => "aspartic acid/asparagine",
            AminoAcid::Cysteine => "cysteine",
            AminoAcid::AsparticAcid => "aspartic acid",
            AminoAcid::GlutamicAcid => "glutamic acid",
            AminoAcid::Phenylalanine => "phenylalanine",
            AminoAcid::Glycine => "glycine",
            AminoAcid::Histidine => "histidine",
            AminoAcid::Isoleucine => "isoleucine",
            AminoAcid::Lysine => "lysine",
            AminoAcid::Leucine => "leucine",
            AminoAcid::Methionine => "methionine",
            AminoAcid::Asparagine => "asparagine",
            AminoAcid::Proline => "proline",
            AminoAcid::Glutamine => "glutamine",
            AminoAcid::Arginine => "arginine",
            AminoAcid::Serine => "serine",
            AminoAcid::Threonine => "threonine",
            AminoAcid::Valine => "valine",
            AminoAcid::Tryptophan => "tryptophan",
            AminoAcid::Any => "any",
            AminoAcid::Tyrosine => "tyrosine",
            AminoAcid::GlutamineGlutamicAcid => "glutamine/glutamic acid",
        }
    }

    /// Decode a one-letter code or a three-letter RNA codon.
    ///
    /// Codons resolve through the standard genetic code; a stop codon is
    /// reported as [`HaemError::StopTranslation`]. Text of any other length
    /// is [`HaemError::InvalidCodon`].
    fn decode(text: &str) -> Result<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ => Self::try_from(text.parse::<Codon>()?),
        }
    }
}

/// The outcome of resolving one codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Residue {
    AminoAcid(AminoAcid),
    Stop,
}

impl Residue {
    /// The amino acid, or [`HaemError::StopTranslation`] for a stop.
    pub fn amino_acid(self) -> Result<AminoAcid> {
        match self {
            Residue::AminoAcid(amino_acid) => Ok(amino_acid),
            Residue::Stop => Err(HaemError::StopTranslation),
        }
    }

    pub fn is_stop(self) -> bool {
        self == Residue::Stop
    }
}

impl From<AminoAcid> for Residue {
    fn from(amino_acid: AminoAcid) -> Self {
        Residue::AminoAcid(amino_acid)
    }
}

/// Resolve through the standard genetic code.
impl TryFrom<Codon> for AminoAcid {
    type Error = HaemError;

    fn try_from(codon: Codon) -> Result<Self> {
        codon.resolve(&GeneticCode::standard())?.amino_acid()
    }
}

impl Unordered for AminoAcid {
    const TYPE_NAME: &'static str = "AminoAcid";
}

impl TryFrom<char> for AminoAcid {
    type Error = HaemError;

    fn try_from(code: char) -> Result<Self> {
        Self::from_code(code)
    }
}

impl From<AminoAcid> for char {
    fn from(amino_acid: AminoAcid) -> char {
        amino_acid.code()
    }
}

impl FromStr for AminoAcid {
    type Err = HaemError;

    fn from_str(text: &str) -> Result<Self> {
        Self::decode(text)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

crate::seq::monomer_ops!(AminoAcid, AminoAcidAlphabet);
