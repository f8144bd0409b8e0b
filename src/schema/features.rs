use serde::{Deserialize, Serialize};

/// Part of speech of a segment.
///
/// Covers the tags the corpus annotation actually uses. `name()` is the base
/// label descriptions are anchored on; `from_tag()` maps the annotation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Adjective,
    Pronoun,
    Demonstrative,
    Relative,
    Verb,
    Preposition,
    Conjunction,
    Determiner,
    Interrogative,
    Negative,
    Vocative,
}

impl PartOfSpeech {
    /// Base English label, e.g. "noun", "proper noun".
    pub fn name(&self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::ProperNoun => "proper noun",
            Self::Adjective => "adjective",
            Self::Pronoun => "personal pronoun",
            Self::Demonstrative => "demonstrative pronoun",
            Self::Relative => "relative pronoun",
            Self::Verb => "verb",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Determiner => "determiner",
            Self::Interrogative => "interrogative particle",
            Self::Negative => "negative particle",
            Self::Vocative => "vocative particle",
        }
    }

    /// Maps a corpus tag (e.g. "N", "CONJ") to the part of speech.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "N" => Some(Self::Noun),
            "PN" => Some(Self::ProperNoun),
            "ADJ" => Some(Self::Adjective),
            "PRON" => Some(Self::Pronoun),
            "DEM" => Some(Self::Demonstrative),
            "REL" => Some(Self::Relative),
            "V" => Some(Self::Verb),
            "P" => Some(Self::Preposition),
            "CONJ" => Some(Self::Conjunction),
            "DET" => Some(Self::Determiner),
            "INTG" => Some(Self::Interrogative),
            "NEG" => Some(Self::Negative),
            "VOC" => Some(Self::Vocative),
            _ => None,
        }
    }
}

/// Grammatical case of a nominal segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    Nominative,
    Accusative,
    Genitive,
}

impl Case {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nominative => "nominative",
            Self::Accusative => "accusative",
            Self::Genitive => "genitive",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "NOM" => Some(Self::Nominative),
            "ACC" => Some(Self::Accusative),
            "GEN" => Some(Self::Genitive),
            _ => None,
        }
    }
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    /// Ordinal-word form used in descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "1st person",
            Self::Second => "2nd person",
            Self::Third => "3rd person",
        }
    }
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
        }
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Dual,
    Plural,
}

impl Number {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Singular => "singular",
            Self::Dual => "dual",
            Self::Plural => "plural",
        }
    }
}

/// Definiteness marking on a noun stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NounState {
    Definite,
    Indefinite,
}

impl NounState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Definite => "definite",
            Self::Indefinite => "indefinite",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "DEF" => Some(Self::Definite),
            "INDEF" => Some(Self::Indefinite),
            _ => None,
        }
    }
}

/// Derivation pattern of a verb stem.
///
/// The annotation spells forms as parenthesised Roman numerals, e.g. `(IV)`;
/// descriptions render the numeric value, e.g. "(form 4)".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbForm {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
    X,
    XI,
    XII,
}

impl VerbForm {
    pub fn value(&self) -> u8 {
        match self {
            Self::I => 1,
            Self::II => 2,
            Self::III => 3,
            Self::IV => 4,
            Self::V => 5,
            Self::VI => 6,
            Self::VII => 7,
            Self::VIII => 8,
            Self::IX => 9,
            Self::X => 10,
            Self::XI => 11,
            Self::XII => 12,
        }
    }

    /// Maps a numeric form value (1..=12) back to the form.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::I),
            2 => Some(Self::II),
            3 => Some(Self::III),
            4 => Some(Self::IV),
            5 => Some(Self::V),
            6 => Some(Self::VI),
            7 => Some(Self::VII),
            8 => Some(Self::VIII),
            9 => Some(Self::IX),
            10 => Some(Self::X),
            11 => Some(Self::XI),
            12 => Some(Self::XII),
            _ => None,
        }
    }

    /// Maps the bare Roman numeral (without parentheses) to the form.
    pub fn from_roman(token: &str) -> Option<Self> {
        match token {
            "I" => Some(Self::I),
            "II" => Some(Self::II),
            "III" => Some(Self::III),
            "IV" => Some(Self::IV),
            "V" => Some(Self::V),
            "VI" => Some(Self::VI),
            "VII" => Some(Self::VII),
            "VIII" => Some(Self::VIII),
            "IX" => Some(Self::IX),
            "X" => Some(Self::X),
            "XI" => Some(Self::XI),
            "XII" => Some(Self::XII),
            _ => None,
        }
    }
}

/// Active/passive voice of a verb stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbVoice {
    Active,
    Passive,
}

impl VerbVoice {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Passive => "passive",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ACT" => Some(Self::Active),
            "PASS" => Some(Self::Passive),
            _ => None,
        }
    }
}

/// Tense-aspect of a verb stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbAspect {
    Perfect,
    Imperfect,
    Imperative,
}

impl VerbAspect {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Imperfect => "imperfect",
            Self::Imperative => "imperative",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PERF" => Some(Self::Perfect),
            "IMPF" => Some(Self::Imperfect),
            "IMPV" => Some(Self::Imperative),
            _ => None,
        }
    }
}

/// Classification of a pronoun suffix, derived rather than annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PronounType {
    Subject,
    Object,
    Possessive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_of_speech_tags() {
        assert_eq!(PartOfSpeech::from_tag("N"), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::from_tag("P"), Some(PartOfSpeech::Preposition));
        assert_eq!(
            PartOfSpeech::from_tag("CONJ"),
            Some(PartOfSpeech::Conjunction)
        );
        assert_eq!(PartOfSpeech::from_tag("XYZ"), None);
    }

    #[test]
    fn part_of_speech_names() {
        assert_eq!(PartOfSpeech::Noun.name(), "noun");
        assert_eq!(PartOfSpeech::ProperNoun.name(), "proper noun");
        assert_eq!(PartOfSpeech::Pronoun.name(), "personal pronoun");
        assert_eq!(PartOfSpeech::Vocative.name(), "vocative particle");
    }

    #[test]
    fn case_labels_and_tags() {
        assert_eq!(Case::Genitive.label(), "genitive");
        assert_eq!(Case::from_tag("GEN"), Some(Case::Genitive));
        assert_eq!(Case::from_tag("NOM"), Some(Case::Nominative));
        assert_eq!(Case::from_tag("gen"), None);
    }

    #[test]
    fn person_ordinal_words() {
        assert_eq!(Person::First.label(), "1st person");
        assert_eq!(Person::Second.label(), "2nd person");
        assert_eq!(Person::Third.label(), "3rd person");
    }

    #[test]
    fn verb_form_values() {
        assert_eq!(VerbForm::I.value(), 1);
        assert_eq!(VerbForm::IV.value(), 4);
        assert_eq!(VerbForm::XII.value(), 12);
    }

    #[test]
    fn verb_form_value_round_trip() {
        for value in 1..=12 {
            let form = VerbForm::from_value(value).unwrap();
            assert_eq!(form.value(), value);
        }
        assert_eq!(VerbForm::from_value(0), None);
        assert_eq!(VerbForm::from_value(13), None);
    }

    #[test]
    fn verb_form_roman_parsing() {
        assert_eq!(VerbForm::from_roman("IV"), Some(VerbForm::IV));
        assert_eq!(VerbForm::from_roman("X"), Some(VerbForm::X));
        assert_eq!(VerbForm::from_roman("XIII"), None);
        assert_eq!(VerbForm::from_roman(""), None);
    }

    #[test]
    fn aspect_tags() {
        assert_eq!(VerbAspect::from_tag("PERF"), Some(VerbAspect::Perfect));
        assert_eq!(VerbAspect::from_tag("IMPF"), Some(VerbAspect::Imperfect));
        assert_eq!(VerbAspect::from_tag("IMPV"), Some(VerbAspect::Imperative));
        assert_eq!(VerbAspect::from_tag("PAST"), None);
    }

    #[test]
    fn ron_round_trip() {
        let serialized = ron::to_string(&Case::Genitive).unwrap();
        let deserialized: Case = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, Case::Genitive);
    }
}
