//! Five-bit nucleotide masks.
//!
//! Every nucleotide code is a mask over four monomer bits plus a gap bit.
//! The 15 non-empty subsets of the monomer bits are the IUPAC codes (one bit
//! is an exact base, two or three bits a documented ambiguity, four bits `N`).
//! The gap bit always stands alone.
//!
//! The monomer bit order (A, C, G, T/U) doubles as the base index used by the
//! codon tables in [`crate::codon`].

pub(crate) const A: u8 = 0b0_0001;
pub(crate) const C: u8 = 0b0_0010;
pub(crate) const G: u8 = 0b0_0100;
/// Thymine in DNA, uracil in RNA.
pub(crate) const T: u8 = 0b0_1000;
pub(crate) const GAP: u8 = 0b1_0000;
pub(crate) const ANY: u8 = A | C | G | T;

const MONOMERS: [u8; 4] = [A, C, G, T];

/// Watson-Crick complement: swaps A with T/U and C with G.
///
/// The gap and `ANY` masks are fixed points, and applying it twice is the
/// identity.
pub(crate) const fn complement(mask: u8) -> u8 {
    if mask & GAP != 0 {
        return mask;
    }
    ((mask & A) << 3) | ((mask & T) >> 3) | ((mask & C) << 1) | ((mask & G) >> 1)
}

/// Whether `mask` is a valid nucleotide code.
pub(crate) const fn is_valid(mask: u8) -> bool {
    mask == GAP || (mask != 0 && mask & !ANY == 0)
}

/// More than one monomer bit set.
pub(crate) const fn is_ambiguous(mask: u8) -> bool {
    mask & GAP == 0 && mask.count_ones() > 1
}

/// The single-bit masks present in `mask`, in A, C, G, T order.
pub(crate) fn monomer_bits(mask: u8) -> impl Iterator<Item = u8> {
    MONOMERS.into_iter().filter(move |&bit| mask & bit != 0)
}

/// Position of a single monomer bit: A=0, C=1, G=2, T/U=3.
pub(crate) const fn bit_index(bit: u8) -> usize {
    bit.trailing_zeros() as usize
}
