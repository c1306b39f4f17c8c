//! Structured error types for the haem sequence algebra.

use thiserror::Error;

/// Unified error type for all haem operations.
///
/// Every variant is terminal: nothing here is transient or worth retrying.
/// Messages are stable and part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HaemError {
    /// Text passed to a single-code decoder was not exactly one character.
    #[error("expected a string of length 1")]
    InvalidCodeLength,

    /// A character with no mapping in the given alphabet.
    #[error("invalid IUPAC {alphabet} code \"{code}\"")]
    InvalidCode {
        /// Alphabet label (`DNA`, `RNA` or `amino acid`).
        alphabet: &'static str,
        /// The offending character.
        code: char,
    },

    /// Codon text that is neither a single code nor a triplet.
    #[error("invalid amino acid codon")]
    InvalidCodon,

    /// An ambiguous codon whose expansion does not resolve to one residue
    /// or a known two-fold ambiguity code.
    #[error("ambiguous codon")]
    AmbiguousCodon,

    /// A codon with a gap in any position.
    #[error("codon contains gap")]
    CodonGap,

    /// Sequence index beyond bounds.
    #[error("{type_name} index out of range")]
    IndexOutOfRange {
        /// Name of the indexed sequence type.
        type_name: &'static str,
    },

    /// A slice was requested with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroSliceStep,

    /// Ordering comparison on a type without an order.
    #[error("'{op}' not supported between instances of '{type_name}' and '{type_name}'")]
    UnsupportedOperation {
        /// Operator symbol, e.g. `<`.
        op: &'static str,
        /// Name of the compared type.
        type_name: &'static str,
    },

    /// No exact `AUG` triplet anywhere in the sequence.
    #[error("no start codon found")]
    NoStartCodon,

    /// The reading frame ran out before a stop codon.
    #[error("no stop codon found")]
    NoStopCodon,

    /// The decoded codon is a valid stop codon.
    ///
    /// Raised by single-codon decoding so callers can tell "stop" apart from
    /// malformed input. Whole-sequence translation consumes it.
    #[error("stop translation")]
    StopTranslation,

    /// An NCBI genetic code number with no table.
    #[error("unknown genetic code table {0}")]
    UnknownGeneticCode(u8),
}

impl HaemError {
    /// Whether this is the stop-codon signal rather than a real failure.
    pub fn is_stop(&self) -> bool {
        matches!(self, HaemError::StopTranslation)
    }
}

/// Convenience alias used throughout the haem crates.
pub type Result<T> = std::result::Result<T, HaemError>;
