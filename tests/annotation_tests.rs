//! End-to-end tests: raw corpus rows through parsing and description.

use morphology_engine::core::annotation::{parse_segment, AnnotationError};
use morphology_engine::core::descriptor::Descriptor;

#[test]
fn describe_bi_prefix_row() {
    // First segment of the basmala: the prefixed preposition bi.
    let segment = parse_segment("P", "PREFIX|bi+").unwrap();
    let desc = Descriptor::new().describe(&segment);
    assert_eq!(desc, "prefixed preposition");
}

#[test]
fn describe_somi_stem_row() {
    // Second segment of the basmala: the noun {som ("name") in the genitive.
    let segment = parse_segment("N", "STEM|POS:N|LEM:{som|ROOT:smw|M|GEN").unwrap();
    let desc = Descriptor::new().describe(&segment);
    assert_eq!(desc, "genitive masculine noun");
}

#[test]
fn describe_wa_conjunction_row() {
    let segment = parse_segment("CONJ", "PREFIX|w+").unwrap();
    let desc = Descriptor::new().describe(&segment);
    assert_eq!(desc, "prefixed conjunction {wa} (and)");
}

#[test]
fn describe_object_pronoun_suffix_row() {
    let segment = parse_segment("PRON", "SUFFIX|PRON:3MP").unwrap();
    let desc = Descriptor::new().describe(&segment);
    assert_eq!(desc, "3rd person masculine plural personal pronoun");
}

#[test]
fn describe_subject_pronoun_suffix_row() {
    // Nominative marks the attached pronoun as a subject pronoun, whose phi
    // features follow the verb and are not repeated.
    let segment = parse_segment("PRON", "SUFFIX|PRON:3MP|NOM").unwrap();
    let desc = Descriptor::new().describe(&segment);
    assert_eq!(desc, "personal pronoun");
}

#[test]
fn describe_derived_verb_stem_row() {
    let segment = parse_segment("V", "STEM|POS:V|LEM:nzl|ROOT:nzl|(IV)|PASS|IMPF|3MS").unwrap();
    let desc = Descriptor::new().describe(&segment);
    assert_eq!(desc, "3rd person masculine singular (form 4) passive imperfect verb");
}

#[test]
fn malformed_rows_are_rejected() {
    assert!(matches!(
        parse_segment("N", ""),
        Err(AnnotationError::Empty)
    ));
    assert!(matches!(
        parse_segment("N", "ROOT:smw|GEN"),
        Err(AnnotationError::MissingSegmentKind(_))
    ));
    assert!(matches!(
        parse_segment("N", "STEM|BOGUS"),
        Err(AnnotationError::UnknownToken(_))
    ));
    assert!(matches!(
        parse_segment("N", "STEM|GEN|ACC"),
        Err(AnnotationError::ConflictingFeature(_))
    ));
}

#[test]
fn parsing_does_not_guess_missing_features() {
    let segment = parse_segment("N", "STEM|POS:N").unwrap();
    assert!(segment.case.is_none());
    assert!(segment.gender.is_none());
    assert!(segment.noun_state.is_none());
    assert_eq!(Descriptor::new().describe(&segment), "noun");
}
