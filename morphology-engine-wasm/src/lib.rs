//! WASM bindings for morphology-engine: powers the corpus word-by-word viewer.

use wasm_bindgen::prelude::*;

use morphology_engine::core::annotation::parse_segment;
use morphology_engine::core::descriptor::Descriptor;
use morphology_engine::core::gloss::GlossTable;
use morphology_engine::schema::features::{
    Case, Gender, NounState, Number, PartOfSpeech, Person, VerbAspect, VerbForm, VerbVoice,
};
use morphology_engine::schema::segment::{Segment, SegmentKind};

// ---------------------------------------------------------------------------
// Embedded gloss data: compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const GLOSSES: &str = include_str!("../../data/glosses.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Deserialize)]
struct SegmentInput {
    kind: String,
    name: Option<String>,
    part_of_speech: Option<String>,
    lemma: Option<String>,
    root: Option<String>,
    case: Option<String>,
    person: Option<u8>,
    gender: Option<String>,
    number: Option<String>,
    noun_state: Option<String>,
    verb_form: Option<u8>,
    verb_voice: Option<String>,
    verb_aspect: Option<String>,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------
fn parse_kind(s: &str) -> Option<SegmentKind> {
    match s.to_lowercase().as_str() {
        "prefix" => Some(SegmentKind::Prefix),
        "stem" => Some(SegmentKind::Stem),
        "suffix" => Some(SegmentKind::Suffix),
        _ => None,
    }
}

fn parse_pos(s: &str) -> Option<PartOfSpeech> {
    match s.to_lowercase().as_str() {
        "noun" => Some(PartOfSpeech::Noun),
        "proper_noun" => Some(PartOfSpeech::ProperNoun),
        "adjective" => Some(PartOfSpeech::Adjective),
        "pronoun" => Some(PartOfSpeech::Pronoun),
        "demonstrative" => Some(PartOfSpeech::Demonstrative),
        "relative" => Some(PartOfSpeech::Relative),
        "verb" => Some(PartOfSpeech::Verb),
        "preposition" => Some(PartOfSpeech::Preposition),
        "conjunction" => Some(PartOfSpeech::Conjunction),
        "determiner" => Some(PartOfSpeech::Determiner),
        "interrogative" => Some(PartOfSpeech::Interrogative),
        "negative" => Some(PartOfSpeech::Negative),
        "vocative" => Some(PartOfSpeech::Vocative),
        _ => None,
    }
}

fn parse_case(s: &str) -> Option<Case> {
    match s.to_lowercase().as_str() {
        "nominative" => Some(Case::Nominative),
        "accusative" => Some(Case::Accusative),
        "genitive" => Some(Case::Genitive),
        _ => None,
    }
}

fn parse_person(value: u8) -> Option<Person> {
    match value {
        1 => Some(Person::First),
        2 => Some(Person::Second),
        3 => Some(Person::Third),
        _ => None,
    }
}

fn parse_gender(s: &str) -> Option<Gender> {
    match s.to_lowercase().as_str() {
        "masculine" => Some(Gender::Masculine),
        "feminine" => Some(Gender::Feminine),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<Number> {
    match s.to_lowercase().as_str() {
        "singular" => Some(Number::Singular),
        "dual" => Some(Number::Dual),
        "plural" => Some(Number::Plural),
        _ => None,
    }
}

fn parse_noun_state(s: &str) -> Option<NounState> {
    match s.to_lowercase().as_str() {
        "definite" => Some(NounState::Definite),
        "indefinite" => Some(NounState::Indefinite),
        _ => None,
    }
}

fn parse_voice(s: &str) -> Option<VerbVoice> {
    match s.to_lowercase().as_str() {
        "active" => Some(VerbVoice::Active),
        "passive" => Some(VerbVoice::Passive),
        _ => None,
    }
}

fn parse_aspect(s: &str) -> Option<VerbAspect> {
    match s.to_lowercase().as_str() {
        "perfect" => Some(VerbAspect::Perfect),
        "imperfect" => Some(VerbAspect::Imperfect),
        "imperative" => Some(VerbAspect::Imperative),
        _ => None,
    }
}

fn convert<T>(
    field: &str,
    value: &Option<String>,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, JsError> {
    match value {
        None => Ok(None),
        Some(s) => parse(s)
            .map(Some)
            .ok_or_else(|| JsError::new(&format!("Unknown {}: {}", field, s))),
    }
}

// ---------------------------------------------------------------------------
// SegmentDescriber: the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct SegmentDescriber {
    descriptor: Descriptor,
}

#[wasm_bindgen]
impl SegmentDescriber {
    /// Create a describer with the built-in gloss tables extended by the
    /// embedded curated data.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SegmentDescriber, JsError> {
        let extra = GlossTable::parse_ron(data::GLOSSES)
            .map_err(|e| JsError::new(&format!("Gloss parse error: {e}")))?;
        let mut glosses = GlossTable::default();
        glosses.merge(extra);
        Ok(SegmentDescriber {
            descriptor: Descriptor::with_glosses(glosses),
        })
    }

    /// Describe one raw corpus row: a part-of-speech tag and a
    /// pipe-delimited feature string.
    pub fn describe(&self, tag: &str, features: &str) -> Result<String, JsError> {
        let segment = parse_segment(tag, features)
            .map_err(|e| JsError::new(&format!("Annotation error: {e}")))?;
        Ok(self.descriptor.describe(&segment))
    }

    /// Describe a segment given as a JSON record.
    ///
    /// Expected JSON shape:
    /// ```json
    /// {
    ///   "kind": "stem",
    ///   "part_of_speech": "noun",
    ///   "case": "genitive",
    ///   "gender": "masculine"
    /// }
    /// ```
    pub fn describe_json(&self, segment_json: &str) -> Result<String, JsError> {
        let input: SegmentInput = serde_json::from_str(segment_json)
            .map_err(|e| JsError::new(&format!("Invalid segment JSON: {e}")))?;
        let segment = self.build_segment(&input)?;
        Ok(self.descriptor.describe(&segment))
    }

    /// Return JSON array of segment kind names.
    pub fn segment_kinds() -> String {
        serde_json::to_string(&["prefix", "stem", "suffix"]).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of part-of-speech names accepted by `describe_json`.
    pub fn parts_of_speech() -> String {
        serde_json::to_string(&[
            "noun",
            "proper_noun",
            "adjective",
            "pronoun",
            "demonstrative",
            "relative",
            "verb",
            "preposition",
            "conjunction",
            "determiner",
            "interrogative",
            "negative",
            "vocative",
        ])
        .unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of grammatical case names.
    pub fn cases() -> String {
        serde_json::to_string(&["nominative", "accusative", "genitive"])
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of verb aspect names.
    pub fn verb_aspects() -> String {
        serde_json::to_string(&["perfect", "imperfect", "imperative"])
            .unwrap_or_else(|_| "[]".to_string())
    }
}

// Private helpers
impl SegmentDescriber {
    fn build_segment(&self, input: &SegmentInput) -> Result<Segment, JsError> {
        let kind = parse_kind(&input.kind)
            .ok_or_else(|| JsError::new(&format!("Unknown segment kind: {}", input.kind)))?;

        let part_of_speech = convert("part of speech", &input.part_of_speech, parse_pos)?;

        let name = match (&input.name, part_of_speech) {
            (Some(name), _) => name.clone(),
            (None, Some(pos)) => pos.name().to_string(),
            (None, None) => kind.label().to_string(),
        };

        let person = match input.person {
            None => None,
            Some(value) => Some(
                parse_person(value)
                    .ok_or_else(|| JsError::new(&format!("Unknown person: {value}")))?,
            ),
        };

        let verb_form = match input.verb_form {
            None => None,
            Some(value) => Some(
                VerbForm::from_value(value)
                    .ok_or_else(|| JsError::new(&format!("Unknown verb form: {value}")))?,
            ),
        };

        Ok(Segment {
            kind,
            name,
            part_of_speech,
            lemma: input.lemma.clone(),
            root: input.root.clone(),
            case: convert("case", &input.case, parse_case)?,
            person,
            gender: convert("gender", &input.gender, parse_gender)?,
            number: convert("number", &input.number, parse_number)?,
            noun_state: convert("noun state", &input.noun_state, parse_noun_state)?,
            verb_form,
            verb_voice: convert("verb voice", &input.verb_voice, parse_voice)?,
            verb_aspect: convert("verb aspect", &input.verb_aspect, parse_aspect)?,
        })
    }
}
