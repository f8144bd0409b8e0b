//! Corpus annotation parsing: raw tagged rows into typed segment records.
//!
//! A corpus row carries a part-of-speech tag (e.g. `N`) and a pipe-delimited
//! feature string (e.g. `STEM|POS:N|LEM:{som|ROOT:smw|M|GEN`). Parsing is
//! strict: a malformed row is upstream data corruption and is surfaced
//! immediately, never patched over.

use thiserror::Error;

use crate::schema::features::{
    Case, Gender, NounState, Number, PartOfSpeech, Person, VerbAspect, VerbForm, VerbVoice,
};
use crate::schema::segment::{Segment, SegmentKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("empty annotation")]
    Empty,
    #[error("annotation does not start with a segment kind: '{0}'")]
    MissingSegmentKind(String),
    #[error("unknown part of speech: '{0}'")]
    UnknownPartOfSpeech(String),
    #[error("unknown annotation token: '{0}'")]
    UnknownToken(String),
    #[error("feature given more than once: '{0}'")]
    ConflictingFeature(String),
}

/// Parse one corpus row into a segment record.
///
/// `tag` is the row's part-of-speech column; a `POS:` feature token takes
/// precedence over it, and a tag outside the modelled set is treated as
/// no part of speech rather than an error (the feature string is the
/// authoritative source).
pub fn parse_segment(tag: &str, features: &str) -> Result<Segment, AnnotationError> {
    let features = features.trim();
    if features.is_empty() {
        return Err(AnnotationError::Empty);
    }

    let mut tokens = features.split('|');

    let kind_token = tokens.next().unwrap_or_default();
    let kind = SegmentKind::from_tag(kind_token)
        .ok_or_else(|| AnnotationError::MissingSegmentKind(kind_token.to_string()))?;

    let mut segment = Segment::new(kind, "");

    for token in tokens {
        parse_token(token, &mut segment)?;
    }

    if segment.part_of_speech.is_none() {
        segment.part_of_speech = PartOfSpeech::from_tag(tag);
    }

    segment.name = segment
        .part_of_speech
        .map(|pos| pos.name())
        .unwrap_or_else(|| segment.kind.label())
        .to_string();

    Ok(segment)
}

fn parse_token(token: &str, segment: &mut Segment) -> Result<(), AnnotationError> {
    if token.is_empty() {
        return Err(AnnotationError::UnknownToken(String::new()));
    }

    if let Some(pos_tag) = token.strip_prefix("POS:") {
        let pos = PartOfSpeech::from_tag(pos_tag)
            .ok_or_else(|| AnnotationError::UnknownPartOfSpeech(pos_tag.to_string()))?;
        return set_once(&mut segment.part_of_speech, pos, token);
    }

    if let Some(lemma) = token.strip_prefix("LEM:") {
        return set_once(&mut segment.lemma, lemma.to_string(), token);
    }

    if let Some(root) = token.strip_prefix("ROOT:") {
        return set_once(&mut segment.root, root.to_string(), token);
    }

    // Attached pronoun: part of speech plus fused phi features, e.g. PRON:3MS
    if let Some(phi) = token.strip_prefix("PRON:") {
        set_once(&mut segment.part_of_speech, PartOfSpeech::Pronoun, token)?;
        return apply_phi(phi, segment, token);
    }

    if let Some(case) = Case::from_tag(token) {
        return set_once(&mut segment.case, case, token);
    }
    if let Some(state) = NounState::from_tag(token) {
        return set_once(&mut segment.noun_state, state, token);
    }
    if let Some(voice) = VerbVoice::from_tag(token) {
        return set_once(&mut segment.verb_voice, voice, token);
    }
    if let Some(aspect) = VerbAspect::from_tag(token) {
        return set_once(&mut segment.verb_aspect, aspect, token);
    }

    // Verb form: parenthesised Roman numeral, e.g. (IV)
    if let Some(inner) = token.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        let form = VerbForm::from_roman(inner)
            .ok_or_else(|| AnnotationError::UnknownToken(token.to_string()))?;
        return set_once(&mut segment.verb_form, form, token);
    }

    // Prefix particle lemma, written with a trailing attachment marker: bi+
    if let Some(lemma) = token.strip_suffix('+') {
        if lemma.is_empty() {
            return Err(AnnotationError::UnknownToken(token.to_string()));
        }
        return set_once(&mut segment.lemma, lemma.to_string(), token);
    }

    // Fused phi token, e.g. 3MS, 2D, M, FP
    if is_phi_token(token) {
        return apply_phi(token, segment, token);
    }

    Err(AnnotationError::UnknownToken(token.to_string()))
}

/// True if the token is person/gender/number spelled in that order, with
/// each position optional but at least one present.
fn is_phi_token(token: &str) -> bool {
    let mut chars = token.chars().peekable();
    let mut matched = false;

    if matches!(chars.peek(), Some('1' | '2' | '3')) {
        chars.next();
        matched = true;
    }
    if matches!(chars.peek(), Some('M' | 'F')) {
        chars.next();
        matched = true;
    }
    if matches!(chars.peek(), Some('S' | 'D' | 'P')) {
        chars.next();
        matched = true;
    }

    matched && chars.next().is_none()
}

fn apply_phi(phi: &str, segment: &mut Segment, token: &str) -> Result<(), AnnotationError> {
    let mut chars = phi.chars().peekable();
    let mut matched = false;

    let person = chars.peek().and_then(|c| match c {
        '1' => Some(Person::First),
        '2' => Some(Person::Second),
        '3' => Some(Person::Third),
        _ => None,
    });
    if let Some(person) = person {
        chars.next();
        set_once(&mut segment.person, person, token)?;
        matched = true;
    }

    let gender = chars.peek().and_then(|c| match c {
        'M' => Some(Gender::Masculine),
        'F' => Some(Gender::Feminine),
        _ => None,
    });
    if let Some(gender) = gender {
        chars.next();
        set_once(&mut segment.gender, gender, token)?;
        matched = true;
    }

    let number = chars.peek().and_then(|c| match c {
        'S' => Some(Number::Singular),
        'D' => Some(Number::Dual),
        'P' => Some(Number::Plural),
        _ => None,
    });
    if let Some(number) = number {
        chars.next();
        set_once(&mut segment.number, number, token)?;
        matched = true;
    }

    if !matched || chars.next().is_some() {
        return Err(AnnotationError::UnknownToken(token.to_string()));
    }
    Ok(())
}

fn set_once<T>(slot: &mut Option<T>, value: T, token: &str) -> Result<(), AnnotationError> {
    if slot.is_some() {
        return Err(AnnotationError::ConflictingFeature(token.to_string()));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prefix_row() {
        let segment = parse_segment("P", "PREFIX|bi+").unwrap();
        assert_eq!(segment.kind, SegmentKind::Prefix);
        assert_eq!(segment.part_of_speech, Some(PartOfSpeech::Preposition));
        assert_eq!(segment.lemma.as_deref(), Some("bi"));
        assert_eq!(segment.name, "preposition");
    }

    #[test]
    fn parse_stem_row() {
        let segment = parse_segment("N", "STEM|POS:N|LEM:{som|ROOT:smw|M|GEN").unwrap();
        assert_eq!(segment.kind, SegmentKind::Stem);
        assert_eq!(segment.part_of_speech, Some(PartOfSpeech::Noun));
        assert_eq!(segment.lemma.as_deref(), Some("{som"));
        assert_eq!(segment.root.as_deref(), Some("smw"));
        assert_eq!(segment.gender, Some(Gender::Masculine));
        assert_eq!(segment.case, Some(Case::Genitive));
        assert_eq!(segment.name, "noun");
    }

    #[test]
    fn parse_verb_stem_row() {
        let segment = parse_segment("V", "STEM|POS:V|LEM:nzl|ROOT:nzl|(IV)|PASS|IMPF|3MS").unwrap();
        assert_eq!(segment.verb_form, Some(VerbForm::IV));
        assert_eq!(segment.verb_voice, Some(VerbVoice::Passive));
        assert_eq!(segment.verb_aspect, Some(VerbAspect::Imperfect));
        assert_eq!(segment.person, Some(Person::Third));
        assert_eq!(segment.gender, Some(Gender::Masculine));
        assert_eq!(segment.number, Some(Number::Singular));
        assert_eq!(segment.name, "verb");
    }

    #[test]
    fn parse_pronoun_suffix_row() {
        let segment = parse_segment("PRON", "SUFFIX|PRON:3MP").unwrap();
        assert_eq!(segment.kind, SegmentKind::Suffix);
        assert_eq!(segment.part_of_speech, Some(PartOfSpeech::Pronoun));
        assert_eq!(segment.person, Some(Person::Third));
        assert_eq!(segment.gender, Some(Gender::Masculine));
        assert_eq!(segment.number, Some(Number::Plural));
        assert_eq!(segment.name, "personal pronoun");
    }

    #[test]
    fn pos_token_overrides_row_tag() {
        let segment = parse_segment("N", "STEM|POS:ADJ|GEN").unwrap();
        assert_eq!(segment.part_of_speech, Some(PartOfSpeech::Adjective));
        assert_eq!(segment.name, "adjective");
    }

    #[test]
    fn unknown_row_tag_is_tolerated() {
        let segment = parse_segment("SP", "STEM|GEN").unwrap();
        assert_eq!(segment.part_of_speech, None);
        assert_eq!(segment.name, "stem");
    }

    #[test]
    fn phi_token_shapes() {
        assert!(is_phi_token("3MS"));
        assert!(is_phi_token("2D"));
        assert!(is_phi_token("M"));
        assert!(is_phi_token("FP"));
        assert!(is_phi_token("1P"));
        assert!(!is_phi_token(""));
        assert!(!is_phi_token("MM"));
        assert!(!is_phi_token("S3"));
        assert!(!is_phi_token("GEN"));
    }

    #[test]
    fn empty_annotation_is_an_error() {
        assert_eq!(parse_segment("N", ""), Err(AnnotationError::Empty));
        assert_eq!(parse_segment("N", "   "), Err(AnnotationError::Empty));
    }

    #[test]
    fn missing_kind_is_an_error() {
        assert_eq!(
            parse_segment("N", "POS:N|GEN"),
            Err(AnnotationError::MissingSegmentKind("POS:N".to_string()))
        );
    }

    #[test]
    fn unknown_token_is_an_error() {
        assert_eq!(
            parse_segment("N", "STEM|WAT"),
            Err(AnnotationError::UnknownToken("WAT".to_string()))
        );
    }

    #[test]
    fn unknown_pos_token_is_an_error() {
        assert_eq!(
            parse_segment("N", "STEM|POS:ZZ"),
            Err(AnnotationError::UnknownPartOfSpeech("ZZ".to_string()))
        );
    }

    #[test]
    fn repeated_feature_is_an_error() {
        assert_eq!(
            parse_segment("N", "STEM|GEN|NOM"),
            Err(AnnotationError::ConflictingFeature("NOM".to_string()))
        );
        assert_eq!(
            parse_segment("N", "STEM|3MS|F"),
            Err(AnnotationError::ConflictingFeature("F".to_string()))
        );
    }

    #[test]
    fn bad_verb_form_is_an_error() {
        assert_eq!(
            parse_segment("V", "STEM|(XIII)"),
            Err(AnnotationError::UnknownToken("(XIII)".to_string()))
        );
    }

    #[test]
    fn bare_attachment_marker_is_an_error() {
        assert_eq!(
            parse_segment("P", "PREFIX|+"),
            Err(AnnotationError::UnknownToken("+".to_string()))
        );
    }
}
