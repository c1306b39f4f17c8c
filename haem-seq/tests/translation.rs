use haem_core::HaemError;
use haem_seq::{
    AminoAcid, AminoAcidSequence, Codon, DnaSequence, GeneticCode, GeneticCodeId, Monomer,
    Residue, RnaBase, RnaSequence,
};

fn rna(text: &str) -> RnaSequence {
    RnaSequence::new(text).unwrap()
}

#[test]
fn translates_first_reading_frame() {
    assert_eq!(rna("AUGUGGUAA").translate().unwrap(), AminoAcidSequence::new("MW").unwrap());
    assert_eq!(rna("GGAUGCCCUGAUGA").translate().unwrap().to_string(), "MP");
}

#[test]
fn translation_errors_match_messages() {
    let cases = [
        ("", "no start codon found"),
        ("CCCGGG", "no start codon found"),
        ("AUG", "no stop codon found"),
        ("AUGCCCA", "no stop codon found"),
        ("AUGC-CUAA", "codon contains gap"),
        ("AUGUANUAA", "ambiguous codon"),
    ];
    for (text, message) in cases {
        assert_eq!(rna(text).translate().unwrap_err().to_string(), message, "{text}");
    }
}

#[test]
fn ambiguous_start_is_not_a_start() {
    assert_eq!(rna("NUGUAA").translate(), Err(HaemError::NoStartCodon));
    assert_eq!(rna("RUGAUGUAA").translate().unwrap().to_string(), "M");
}

#[test]
fn single_codon_decoding() {
    assert_eq!(AminoAcid::decode("GAY"), Ok(AminoAcid::AsparticAcid));
    assert_eq!(AminoAcid::decode("RAY"), Ok(AminoAcid::AsparticAcidAsparagine));
    assert_eq!(AminoAcid::decode("SAR"), Ok(AminoAcid::GlutamineGlutamicAcid));
    assert!(AminoAcid::decode("UAA").unwrap_err().is_stop());
    assert_eq!(AminoAcid::decode("UAN"), Err(HaemError::AmbiguousCodon));
    assert_eq!(AminoAcid::decode("ABCD"), Err(HaemError::InvalidCodon));
}

#[test]
fn codon_resolution_reports_stop_as_value() {
    let code = GeneticCode::standard();
    let stop: Codon = "UAR".parse().unwrap();
    assert_eq!(stop.resolve(&code), Ok(Residue::Stop));
    let leucine = Codon::new(RnaBase::Cytosine, RnaBase::Uracil, RnaBase::Any);
    assert_eq!(leucine.resolve(&code), Ok(Residue::AminoAcid(AminoAcid::Leucine)));
}

#[test]
fn alternative_genetic_codes() {
    let ciliate = GeneticCode::from_id(GeneticCodeId::try_from(6).unwrap());
    let seq = rna("AUGUAAUAGUGA");
    assert_eq!(seq.translate().unwrap().to_string(), "M");
    assert_eq!(seq.translate_with(&ciliate).unwrap().to_string(), "MQQ");
}

#[test]
fn dna_translation_goes_through_transcription() {
    let dna = DnaSequence::new("TTATGAAAGCTTAA").unwrap();
    assert_eq!(dna.translate().unwrap().to_string(), "MKA");
    assert_eq!(dna.transcribe().translate(), dna.translate());
}
