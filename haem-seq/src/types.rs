//! Type aliases for common sequence types and alphabet-specific operations.

use std::ops::Not;

use haem_core::Result;

use crate::alphabet::{AminoAcidAlphabet, DnaAlphabet, RnaAlphabet};
use crate::codon::{self, GeneticCode};
use crate::seq::Seq;

/// A validated DNA sequence (IUPAC codes plus gap).
pub type DnaSequence = Seq<DnaAlphabet>;

/// A validated RNA sequence (IUPAC codes plus gap).
pub type RnaSequence = Seq<RnaAlphabet>;

/// A validated amino acid sequence (20 residues plus `B`, `Z`, `X`).
pub type AminoAcidSequence = Seq<AminoAcidAlphabet>;

impl DnaSequence {
    /// Complement every base, keeping the order.
    pub fn complement(&self) -> Self {
        self.iter().map(|base| base.complement()).collect()
    }

    /// Complement every base and reverse the order.
    pub fn reverse_complement(&self) -> Self {
        self.iter().rev().map(|base| base.complement()).collect()
    }

    /// Transcribe DNA to RNA (T to U).
    pub fn transcribe(&self) -> RnaSequence {
        self.map_members(|base| base.transcribe())
    }

    /// Transcribe, then translate with the standard genetic code.
    pub fn translate(&self) -> Result<AminoAcidSequence> {
        self.transcribe().translate()
    }

    /// Transcribe, then translate with `code`.
    pub fn translate_with(&self, code: &GeneticCode) -> Result<AminoAcidSequence> {
        self.transcribe().translate_with(code)
    }
}

impl RnaSequence {
    /// Complement every base, keeping the order.
    pub fn complement(&self) -> Self {
        self.iter().map(|base| base.complement()).collect()
    }

    /// Complement every base and reverse the order.
    pub fn reverse_complement(&self) -> Self {
        self.iter().rev().map(|base| base.complement()).collect()
    }

    /// Retro-transcribe RNA to DNA (U to T).
    pub fn retro_transcribe(&self) -> DnaSequence {
        self.map_members(|base| base.retro_transcribe())
    }

    /// Translate the reading frame opened by the first `AUG` using the
    /// standard genetic code.
    ///
    /// See [`codon::translate`] for the failure modes.
    pub fn translate(&self) -> Result<AminoAcidSequence> {
        self.translate_with(&GeneticCode::standard())
    }

    /// Translate with `code` instead of the standard table.
    pub fn translate_with(&self, code: &GeneticCode) -> Result<AminoAcidSequence> {
        codon::translate(self, code).map(AminoAcidSequence::from)
    }
}

/// `!seq` is the complement, order kept.
impl Not for &DnaSequence {
    type Output = DnaSequence;

    fn not(self) -> DnaSequence {
        self.complement()
    }
}

impl Not for DnaSequence {
    type Output = DnaSequence;

    fn not(self) -> DnaSequence {
        self.complement()
    }
}

impl Not for &RnaSequence {
    type Output = RnaSequence;

    fn not(self) -> RnaSequence {
        self.complement()
    }
}

impl Not for RnaSequence {
    type Output = RnaSequence;

    fn not(self) -> RnaSequence {
        self.complement()
    }
}
