//! Codons, genetic codes, and translation.
//!
//! Supports 7 NCBI genetic code tables (1, 2, 3, 4, 5, 6, 11). Codons may
//! carry IUPAC ambiguity codes: a codon is resolved by expanding every
//! position into its exact bases, looking up each concrete triplet, and
//! classifying the set of outcomes.

use std::fmt;
use std::str::FromStr;

use haem_core::{HaemError, Result};
use log::{debug, trace};

use crate::alphabet::Monomer;
use crate::amino_acid::{AminoAcid, Residue};
use crate::iupac;
use crate::rna::RnaBase;

// ---------------------------------------------------------------------------
// Genetic code table identifier
// ---------------------------------------------------------------------------

/// NCBI genetic code table identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneticCodeId {
    #[default]
    Standard = 1,
    VertebrateMitochondrial = 2,
    YeastMitochondrial = 3,
    MycoplasmaSpiroplasma = 4,
    InvertebrateMitochondrial = 5,
    CiliateNuclear = 6,
    BacterialPlastid = 11,
}

impl GeneticCodeId {
    /// Every supported table.
    pub const ALL: [GeneticCodeId; 7] = [
        GeneticCodeId::Standard,
        GeneticCodeId::VertebrateMitochondrial,
        GeneticCodeId::YeastMitochondrial,
        GeneticCodeId::MycoplasmaSpiroplasma,
        GeneticCodeId::InvertebrateMitochondrial,
        GeneticCodeId::CiliateNuclear,
        GeneticCodeId::BacterialPlastid,
    ];

    /// The NCBI table number.
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for GeneticCodeId {
    type Error = HaemError;

    fn try_from(number: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.number() == number)
            .ok_or(HaemError::UnknownGeneticCode(number))
    }
}

// ---------------------------------------------------------------------------
// Genetic code tables
// ---------------------------------------------------------------------------

// Indexed by first*16 + second*4 + third with A=0, C=1, G=2, U=3:
//   AAA, AAC, AAG, AAU, ACA, ACC, ACG, ACU, AGA, AGC, AGG, AGU,
//   AUA, AUC, AUG, AUU, CAA, CAC, CAG, CAU, CCA, CCC, CCG, CCU,
//   CGA, CGC, CGG, CGU, CUA, CUC, CUG, CUU, GAA, GAC, GAG, GAU,
//   GCA, GCC, GCG, GCU, GGA, GGC, GGG, GGU, GUA, GUC, GUG, GUU,
//   UAA, UAC, UAG, UAU, UCA, UCC, UCG, UCU, UGA, UGC, UGG, UGU,
//   UUA, UUC, UUG, UUU
// `*` marks a stop.

const STOP: u8 = b'*';

/// Standard genetic code (NCBI Table 1).
const TABLE1: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// Vertebrate mitochondrial (NCBI Table 2).
/// UGA=Trp, AGA=Stop, AGG=Stop, AUA=Met
const TABLE2: [u8; 64] = *b"KNKNTTTT*S*SMIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSSWCWCLFLF";

/// Yeast mitochondrial (NCBI Table 3).
/// CUN=Thr, UGA=Trp, AUA=Met
const TABLE3: [u8; 64] = *b"KNKNTTTTRSRSMIMIQHQHPPPPRRRRTTTTEDEDAAAAGGGGVVVV*Y*YSSSSWCWCLFLF";

/// Mycoplasma/Spiroplasma (NCBI Table 4).
/// UGA=Trp
const TABLE4: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSSWCWCLFLF";

/// Invertebrate mitochondrial (NCBI Table 5).
/// AGA=Ser, AGG=Ser, UGA=Trp, AUA=Met
const TABLE5: [u8; 64] = *b"KNKNTTTTSSSSMIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSSWCWCLFLF";

/// Ciliate nuclear (NCBI Table 6).
/// UAA=Gln, UAG=Gln
const TABLE6: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVVQYQYSSSS*CWCLFLF";

/// Bacterial/plant plastid (NCBI Table 11).
/// Same residues as standard; only initiation differs, which translation
/// here does not model.
const TABLE11: [u8; 64] = TABLE1;

// ---------------------------------------------------------------------------
// GeneticCode
// ---------------------------------------------------------------------------

/// A genetic code translation table.
///
/// Use [`GeneticCode::from_id`] or [`GeneticCode::standard`] to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneticCode {
    id: GeneticCodeId,
    name: &'static str,
    table: [u8; 64],
}

impl GeneticCode {
    /// Create a genetic code table from an NCBI table identifier.
    pub fn from_id(id: GeneticCodeId) -> Self {
        let (name, table) = match id {
            GeneticCodeId::Standard => ("Standard", TABLE1),
            GeneticCodeId::VertebrateMitochondrial => ("Vertebrate Mitochondrial", TABLE2),
            GeneticCodeId::YeastMitochondrial => ("Yeast Mitochondrial", TABLE3),
            GeneticCodeId::MycoplasmaSpiroplasma => ("Mycoplasma/Spiroplasma", TABLE4),
            GeneticCodeId::InvertebrateMitochondrial => ("Invertebrate Mitochondrial", TABLE5),
            GeneticCodeId::CiliateNuclear => ("Ciliate Nuclear", TABLE6),
            GeneticCodeId::BacterialPlastid => ("Bacterial/Plant Plastid", TABLE11),
        };
        Self { id, name, table }
    }

    /// Create the standard genetic code (NCBI Table 1).
    pub fn standard() -> Self {
        Self::from_id(GeneticCodeId::Standard)
    }

    /// Table identifier.
    pub fn id(&self) -> GeneticCodeId {
        self.id
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// All exact stop codons of this table.
    pub fn stop_codons(&self) -> Vec<Codon> {
        (0..64)
            .filter(|&i| self.table[i] == STOP)
            .map(Codon::from_index)
            .collect()
    }

    fn residue_at(&self, index: usize) -> u8 {
        self.table[index]
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}

// ---------------------------------------------------------------------------
// Codon
// ---------------------------------------------------------------------------

/// Three RNA bases, each possibly ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([RnaBase; 3]);

impl Codon {
    /// `AUG`, the only start codon recognized by [`translate`].
    pub const START: Codon = Codon([RnaBase::Adenine, RnaBase::Uracil, RnaBase::Guanine]);

    pub fn new(first: RnaBase, second: RnaBase, third: RnaBase) -> Self {
        Self([first, second, third])
    }

    /// The three bases in order.
    pub fn bases(&self) -> [RnaBase; 3] {
        self.0
    }

    /// Whether any position is the gap.
    pub fn has_gap(&self) -> bool {
        self.0.iter().any(|base| base.is_gap())
    }

    /// Whether any position is an ambiguity code.
    pub fn is_ambiguous(&self) -> bool {
        self.0.iter().any(|base| base.is_ambiguous())
    }

    /// Whether this is exactly `AUG`.
    pub fn is_start(&self) -> bool {
        *self == Self::START
    }

    fn from_index(index: usize) -> Self {
        const EXACT: [RnaBase; 4] = [
            RnaBase::Adenine,
            RnaBase::Cytosine,
            RnaBase::Guanine,
            RnaBase::Uracil,
        ];
        Self([EXACT[index >> 4], EXACT[(index >> 2) & 3], EXACT[index & 3]])
    }

    /// Table indices of every concrete triplet this codon stands for.
    fn table_indices(&self) -> Vec<usize> {
        let [first, second, third] = self.0;
        let mut indices = Vec::with_capacity(64);
        for x in iupac::monomer_bits(first.mask()) {
            for y in iupac::monomer_bits(second.mask()) {
                for z in iupac::monomer_bits(third.mask()) {
                    indices.push(
                        iupac::bit_index(x) * 16 + iupac::bit_index(y) * 4 + iupac::bit_index(z),
                    );
                }
            }
        }
        indices
    }

    /// Resolve this codon against `code`.
    ///
    /// Every concrete triplet must agree on a stop, agree on one residue, or
    /// form one of the two-fold ambiguity pairs (Asp/Asn, Glu/Gln). Any other
    /// mixture is [`HaemError::AmbiguousCodon`].
    pub fn resolve(&self, code: &GeneticCode) -> Result<Residue> {
        if self.has_gap() {
            return Err(HaemError::CodonGap);
        }

        let mut outcomes: Vec<u8> = self
            .table_indices()
            .into_iter()
            .map(|i| code.residue_at(i))
            .collect();
        outcomes.sort_unstable();
        outcomes.dedup();

        match outcomes.as_slice() {
            [STOP] => Ok(Residue::Stop),
            [single] => AminoAcid::from_code(char::from(*single)).map(Residue::AminoAcid),
            [b'D', b'N'] => Ok(Residue::AminoAcid(AminoAcid::AsparticAcidAsparagine)),
            [b'E', b'Q'] => Ok(Residue::AminoAcid(AminoAcid::GlutamineGlutamicAcid)),
            _ => Err(HaemError::AmbiguousCodon),
        }
    }
}

impl TryFrom<&[RnaBase]> for Codon {
    type Error = HaemError;

    fn try_from(bases: &[RnaBase]) -> Result<Self> {
        match bases {
            &[first, second, third] => Ok(Self::new(first, second, third)),
            _ => Err(HaemError::InvalidCodon),
        }
    }
}

/// Three RNA codes, e.g. `"GCN"`.
impl FromStr for Codon {
    type Err = HaemError;

    fn from_str(text: &str) -> Result<Self> {
        if text.chars().count() != 3 {
            return Err(HaemError::InvalidCodon);
        }
        let bases = text
            .chars()
            .map(RnaBase::from_code)
            .collect::<Result<Vec<_>>>()?;
        Self::try_from(bases.as_slice())
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|base| write!(f, "{}", base.code()))
    }
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// Translate the open reading frame starting at the first `AUG`.
///
/// Triplets are read in frame from the start codon. The start codon itself
/// is translated, and translation ends at the first stop codon, which is not
/// included. Everything after the stop is ignored.
///
/// # Errors
///
/// - [`HaemError::NoStartCodon`] if `AUG` never occurs.
/// - [`HaemError::CodonGap`] if a triplet in frame holds a gap, including a
///   trailing partial triplet.
/// - [`HaemError::NoStopCodon`] if the frame runs out before a stop.
/// - [`HaemError::AmbiguousCodon`] if a triplet in frame does not resolve.
pub fn translate(bases: &[RnaBase], code: &GeneticCode) -> Result<Vec<AminoAcid>> {
    let start = bases
        .windows(3)
        .position(|window| window == Codon::START.bases())
        .ok_or(HaemError::NoStartCodon)?;
    debug!("start codon at {start} ({})", code.name());

    let mut protein = Vec::with_capacity((bases.len() - start) / 3);
    let mut frame = &bases[start..];
    loop {
        let width = frame.len().min(3);
        if frame[..width].iter().any(|base| base.is_gap()) {
            return Err(HaemError::CodonGap);
        }
        if frame.len() < 3 {
            return Err(HaemError::NoStopCodon);
        }

        let codon = Codon::try_from(&frame[..3])?;
        match codon.resolve(code)? {
            Residue::Stop => {
                debug!(
                    "stop codon {codon} at {} after {} residues",
                    bases.len() - frame.len(),
                    protein.len()
                );
                return Ok(protein);
            }
            Residue::AminoAcid(amino_acid) => {
                trace!("{codon} -> {}", amino_acid.code());
                protein.push(amino_acid);
            }
        }
        frame = &frame[3..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(text: &str) -> Codon {
        text.parse().unwrap()
    }

    fn rna(text: &str) -> Vec<RnaBase> {
        text.chars().map(|c| RnaBase::from_code(c).unwrap()).collect()
    }

    fn resolve(text: &str) -> Result<Residue> {
        codon(text).resolve(&GeneticCode::standard())
    }

    fn aa(code: char) -> Result<Residue> {
        Ok(Residue::AminoAcid(AminoAcid::from_code(code).unwrap()))
    }

    #[test]
    fn exact_codons() {
        assert_eq!(resolve("AAA"), aa('K'));
        assert_eq!(resolve("AAC"), aa('N'));
        assert_eq!(resolve("AUG"), aa('M'));
        assert_eq!(resolve("UGG"), aa('W'));
        assert_eq!(resolve("UUU"), aa('F'));
        assert_eq!(resolve("GGG"), aa('G'));
        assert_eq!(resolve("UAA"), Ok(Residue::Stop));
        assert_eq!(resolve("UAG"), Ok(Residue::Stop));
        assert_eq!(resolve("UGA"), Ok(Residue::Stop));
    }

    #[test]
    fn fourfold_sites_resolve() {
        assert_eq!(resolve("GCN"), aa('A'));
        assert_eq!(resolve("GGN"), aa('G'));
        assert_eq!(resolve("CUN"), aa('L'));
        assert_eq!(resolve("MGR"), aa('R'));
        assert_eq!(resolve("AUH"), aa('I'));
    }

    #[test]
    fn twofold_ambiguity_pairs() {
        assert_eq!(resolve("RAY"), aa('B'));
        assert_eq!(resolve("SAR"), aa('Z'));
    }

    #[test]
    fn ambiguous_stops() {
        assert_eq!(resolve("UAR"), Ok(Residue::Stop));
        assert_eq!(resolve("URA"), Ok(Residue::Stop));
        assert_eq!(resolve("UAN"), Err(HaemError::AmbiguousCodon));
    }

    #[test]
    fn unresolvable_mixtures() {
        assert_eq!(resolve("NNN"), Err(HaemError::AmbiguousCodon));
        assert_eq!(resolve("AUN"), Err(HaemError::AmbiguousCodon));
        assert_eq!(resolve("GAN"), Err(HaemError::AmbiguousCodon));
    }

    #[test]
    fn gap_codon() {
        assert_eq!(resolve("A-G"), Err(HaemError::CodonGap));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("AU".parse::<Codon>(), Err(HaemError::InvalidCodon));
        assert_eq!("AUGA".parse::<Codon>(), Err(HaemError::InvalidCodon));
        assert!(matches!(
            "ATG".parse::<Codon>(),
            Err(HaemError::InvalidCode { alphabet: "RNA", code: 'T' })
        ));
    }

    #[test]
    fn codon_properties() {
        assert!(codon("AUG").is_start());
        assert!(!codon("AUR").is_start());
        assert!(codon("AUR").is_ambiguous());
        assert!(codon("AU-").has_gap());
        assert_eq!(codon("GCN").to_string(), "GCN");
    }

    #[test]
    fn table_differences() {
        let mito = GeneticCode::from_id(GeneticCodeId::VertebrateMitochondrial);
        assert_eq!(codon("UGA").resolve(&mito), aa('W'));
        assert_eq!(codon("AGA").resolve(&mito), Ok(Residue::Stop));
        assert_eq!(codon("AUA").resolve(&mito), aa('M'));

        let yeast = GeneticCode::from_id(GeneticCodeId::YeastMitochondrial);
        assert_eq!(codon("CUN").resolve(&yeast), aa('T'));

        let invertebrate = GeneticCode::from_id(GeneticCodeId::InvertebrateMitochondrial);
        assert_eq!(codon("AGR").resolve(&invertebrate), aa('S'));

        let ciliate = GeneticCode::from_id(GeneticCodeId::CiliateNuclear);
        assert_eq!(codon("UAR").resolve(&ciliate), aa('Q'));
        assert_eq!(codon("UGA").resolve(&ciliate), Ok(Residue::Stop));

        let plastid = GeneticCode::from_id(GeneticCodeId::BacterialPlastid);
        assert_eq!(plastid.stop_codons(), GeneticCode::standard().stop_codons());
    }

    #[test]
    fn stop_codon_lists() {
        let stops: Vec<String> = GeneticCode::standard()
            .stop_codons()
            .iter()
            .map(Codon::to_string)
            .collect();
        assert_eq!(stops, vec!["UAA", "UAG", "UGA"]);
        assert_eq!(
            GeneticCode::from_id(GeneticCodeId::VertebrateMitochondrial)
                .stop_codons()
                .len(),
            4
        );
    }

    #[test]
    fn genetic_code_ids() {
        assert_eq!(GeneticCodeId::try_from(11), Ok(GeneticCodeId::BacterialPlastid));
        assert_eq!(GeneticCodeId::try_from(7), Err(HaemError::UnknownGeneticCode(7)));
        for id in GeneticCodeId::ALL {
            assert_eq!(GeneticCode::from_id(id).id(), id);
        }
        assert_eq!(GeneticCode::default().name(), "Standard");
    }

    #[test]
    fn translate_reading_frame() {
        let code = GeneticCode::standard();
        let protein = translate(&rna("AUGUGGUAA"), &code).unwrap();
        assert_eq!(protein, vec![AminoAcid::Methionine, AminoAcid::Tryptophan]);

        let protein = translate(&rna("CCAUGAAAUAGGGG"), &code).unwrap();
        assert_eq!(protein, vec![AminoAcid::Methionine, AminoAcid::Lysine]);
    }

    #[test]
    fn translate_stops_before_trailing_garbage() {
        let protein = translate(&rna("AUGUAANNN-"), &GeneticCode::standard()).unwrap();
        assert_eq!(protein, vec![AminoAcid::Methionine]);
    }

    #[test]
    fn translate_failures() {
        let code = GeneticCode::standard();
        assert_eq!(translate(&[], &code), Err(HaemError::NoStartCodon));
        assert_eq!(translate(&rna("AURG"), &code), Err(HaemError::NoStartCodon));
        assert_eq!(translate(&rna("AUG"), &code), Err(HaemError::NoStopCodon));
        assert_eq!(translate(&rna("AUGCC"), &code), Err(HaemError::NoStopCodon));
        assert_eq!(translate(&rna("AUGC-"), &code), Err(HaemError::CodonGap));
        assert_eq!(translate(&rna("AUG-CCUAA"), &code), Err(HaemError::CodonGap));
        assert_eq!(translate(&rna("AUGNNNUAA"), &code), Err(HaemError::AmbiguousCodon));
    }

    #[test]
    fn translate_with_other_table() {
        let mito = GeneticCode::from_id(GeneticCodeId::VertebrateMitochondrial);
        assert_eq!(
            translate(&rna("AUGUGAAGA"), &mito).unwrap(),
            vec![AminoAcid::Methionine, AminoAcid::Tryptophan]
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_codon() -> impl Strategy<Value = Codon> {
        let base = proptest::sample::select(RnaBase::ALL.to_vec());
        (base.clone(), base.clone(), base).prop_map(|(a, b, c)| Codon::new(a, b, c))
    }

    proptest! {
        #[test]
        fn exact_codons_always_resolve(index in 0usize..64) {
            let codon = Codon::from_index(index);
            prop_assert!(!codon.is_ambiguous());
            prop_assert!(codon.resolve(&GeneticCode::standard()).is_ok());
        }

        #[test]
        fn resolution_agrees_with_every_expansion(codon in any_codon()) {
            let code = GeneticCode::standard();
            if let Ok(Residue::AminoAcid(residue)) = codon.resolve(&code) {
                for index in codon.table_indices() {
                    let exact = Codon::from_index(index).resolve(&code).unwrap();
                    match exact {
                        Residue::AminoAcid(found) => {
                            let asx = residue == AminoAcid::AsparticAcidAsparagine
                                && matches!(found, AminoAcid::AsparticAcid | AminoAcid::Asparagine);
                            let glx = residue == AminoAcid::GlutamineGlutamicAcid
                                && matches!(found, AminoAcid::GlutamicAcid | AminoAcid::Glutamine);
                            prop_assert!(found == residue || asx || glx);
                        }
                        Residue::Stop => prop_assert!(false, "stop inside resolved {}", codon),
                    }
                }
            }
        }

        #[test]
        fn translation_output_bounded(bases in proptest::collection::vec(
            proptest::sample::select(vec![
                RnaBase::Adenine,
                RnaBase::Cytosine,
                RnaBase::Guanine,
                RnaBase::Uracil,
            ]),
            0..120,
        )) {
            if let Ok(protein) = translate(&bases, &GeneticCode::standard()) {
                prop_assert!(!protein.is_empty());
                prop_assert_eq!(protein[0], AminoAcid::Methionine);
                prop_assert!(protein.len() * 3 <= bases.len());
            }
        }
    }
}
