use serde::{Deserialize, Serialize};

use super::features::{
    Case, Gender, NounState, Number, PartOfSpeech, Person, PronounType, VerbAspect, VerbForm,
    VerbVoice,
};

/// Position of a segment within its word. Determines which description
/// branch applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    Prefix,
    Stem,
    Suffix,
}

impl SegmentKind {
    /// Fallback base label when the segment carries no part of speech.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Stem => "stem",
            Self::Suffix => "suffix",
        }
    }

    /// Maps the leading annotation token to the kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PREFIX" => Some(Self::Prefix),
            "STEM" => Some(Self::Stem),
            "SUFFIX" => Some(Self::Suffix),
            _ => None,
        }
    }
}

/// One morphological unit of an analysed word.
///
/// A feature that does not apply to the segment is `None`; absence means the
/// corresponding description fragment is simply omitted. The descriptor
/// treats the record as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Precomputed base label ("noun", "preposition", ...) the other
    /// description fragments surround.
    pub name: String,
    pub part_of_speech: Option<PartOfSpeech>,
    pub lemma: Option<String>,
    pub root: Option<String>,
    pub case: Option<Case>,
    pub person: Option<Person>,
    pub gender: Option<Gender>,
    pub number: Option<Number>,
    pub noun_state: Option<NounState>,
    pub verb_form: Option<VerbForm>,
    pub verb_voice: Option<VerbVoice>,
    pub verb_aspect: Option<VerbAspect>,
}

impl Segment {
    /// A segment with every optional feature absent.
    pub fn new(kind: SegmentKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            part_of_speech: None,
            lemma: None,
            root: None,
            case: None,
            person: None,
            gender: None,
            number: None,
            noun_state: None,
            verb_form: None,
            verb_voice: None,
            verb_aspect: None,
        }
    }

    /// Classifies a pronoun suffix by the case its host assigns to it:
    /// nominative suffixes are subject pronouns, genitive suffixes are
    /// possessive, accusative or unmarked suffixes are object pronouns.
    /// `None` for anything that is not a pronoun suffix.
    pub fn pronoun_type(&self) -> Option<PronounType> {
        if self.kind != SegmentKind::Suffix || self.part_of_speech != Some(PartOfSpeech::Pronoun) {
            return None;
        }
        Some(match self.case {
            Some(Case::Nominative) => PronounType::Subject,
            Some(Case::Genitive) => PronounType::Possessive,
            Some(Case::Accusative) | None => PronounType::Object,
        })
    }
}
