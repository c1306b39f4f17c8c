//! IUPAC alphabets, sequences and codon translation for the haem ecosystem.
//!
//! Provides strongly-typed nucleotide and amino acid codes with full IUPAC
//! ambiguity support, plus sequences over them:
//!
//! - **Alphabets**: [`DnaBase`], [`RnaBase`], [`AminoAcid`], tied to their
//!   sequences through [`DnaAlphabet`], [`RnaAlphabet`], [`AminoAcidAlphabet`]
//! - **Base algebra**: complement and (retro-)transcription as bit operations
//!   on a five-bit mask
//! - **Sequences**: [`DnaSequence`], [`RnaSequence`], [`AminoAcidSequence`]
//!   with Python-style indexing and slicing, search and concatenation
//! - **Codon translation**: ambiguity-aware codon resolution over 7 NCBI
//!   genetic codes
//!
//! # Example
//!
//! ```
//! use haem_seq::{AminoAcid, DnaBase, DnaSequence, Monomer};
//!
//! assert_eq!(DnaBase::decode("M").unwrap(), DnaBase::AdenineCytosine);
//! assert_eq!(DnaBase::AdenineCytosine.complement(), DnaBase::GuanineThymine);
//!
//! let dna = DnaSequence::new("GATCCA").unwrap();
//! assert_eq!(dna.slice(Some(0), Some(-1), Some(2)).unwrap().to_string(), "GTC");
//!
//! // Transcribe DNA → RNA, then translate from the first AUG to the stop
//! let rna = DnaSequence::new("CCATGTGGTAA").unwrap().transcribe();
//! assert_eq!(rna.to_string(), "CCAUGUGGUAA");
//! let protein = rna.translate().unwrap();
//! assert_eq!(protein.to_string(), "MW");
//!
//! // Codons with ambiguity codes resolve when every expansion agrees
//! assert_eq!(AminoAcid::decode("GCN").unwrap(), AminoAcid::Alanine);
//! ```

pub mod alphabet;
pub mod amino_acid;
pub mod codon;
pub mod dna;
mod iupac;
pub mod rna;
pub mod seq;
pub mod types;

// Re-export alphabet types
pub use alphabet::{Alphabet, AminoAcidAlphabet, DnaAlphabet, Monomer, RnaAlphabet};

// Re-export code enumerations
pub use amino_acid::{AminoAcid, Residue};
pub use dna::DnaBase;
pub use rna::RnaBase;

// Re-export the generic sequence type
pub use seq::{Pattern, Seq};

// Re-export concrete type aliases and their methods
pub use types::{AminoAcidSequence, DnaSequence, RnaSequence};

// Re-export codon translation
pub use codon::{translate, Codon, GeneticCode, GeneticCodeId};
