#![cfg(feature = "serde")]

use haem_seq::{AminoAcid, DnaBase, DnaSequence, GeneticCodeId, RnaSequence};

#[test]
fn sequences_serialize_as_code_strings() {
    let seq = DnaSequence::new(&"ACGTN-".repeat(5)).unwrap();
    let json = serde_json::to_string(&seq).unwrap();
    assert_eq!(json, format!("\"{}\"", "ACGTN-".repeat(5)));
    let back: DnaSequence = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seq);
}

#[test]
fn deserialization_validates_codes() {
    let err = serde_json::from_str::<RnaSequence>("\"ACGT\"").unwrap_err();
    assert!(err.to_string().contains("invalid IUPAC RNA code \"T\""));
}

#[test]
fn code_enums_use_variant_names() {
    assert_eq!(serde_json::to_string(&DnaBase::Gap).unwrap(), "\"Gap\"");
    assert_eq!(
        serde_json::from_str::<AminoAcid>("\"Tryptophan\"").unwrap(),
        AminoAcid::Tryptophan
    );
    assert_eq!(
        serde_json::to_string(&GeneticCodeId::BacterialPlastid).unwrap(),
        "\"BacterialPlastid\""
    );
}
