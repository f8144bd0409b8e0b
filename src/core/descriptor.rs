//! Morphological description generation: one segment in, one phrase out.
//!
//! Each segment kind has its own branch algorithm. The stem and suffix
//! branches compose an ordered sequence of optional fragments and join the
//! ones that are present; the prefix branch anchors on "prefixed" and may
//! append a transliteration gloss for the particle's lemma.

use crate::core::gloss::GlossTable;
use crate::schema::features::{PartOfSpeech, PronounType};
use crate::schema::segment::{Segment, SegmentKind};

/// Generates fixed-template English descriptions of analysed segments.
///
/// Stateless apart from its gloss tables; `describe` is a pure function of
/// the segment, safe to call from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Descriptor {
    glosses: GlossTable,
}

impl Descriptor {
    /// A descriptor with the curated default gloss table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A descriptor with a caller-provided gloss table.
    pub fn with_glosses(glosses: GlossTable) -> Self {
        Self { glosses }
    }

    /// Generate the morphological description for a segment.
    ///
    /// The output is a non-empty, lower-case, space-joined phrase whose last
    /// word(s) are the segment's base name. Absent features contribute
    /// nothing; no stray separators are produced.
    pub fn describe(&self, segment: &Segment) -> String {
        match segment.kind {
            SegmentKind::Prefix => self.describe_prefix(segment),
            SegmentKind::Stem => describe_stem(segment),
            SegmentKind::Suffix => describe_suffix(segment),
        }
    }

    fn describe_prefix(&self, segment: &Segment) -> String {
        let mut desc = format!("prefixed {}", segment.name);

        let gloss = match segment.part_of_speech {
            Some(PartOfSpeech::Preposition) => segment
                .lemma
                .as_deref()
                .and_then(|lemma| self.glosses.preposition(lemma)),
            Some(PartOfSpeech::Conjunction) => segment
                .lemma
                .as_deref()
                .and_then(|lemma| self.glosses.conjunction(lemma)),
            _ => None,
        };

        // A lemma without a table entry appends nothing: the tables are
        // intentionally incomplete and lookup fails open.
        if let Some(gloss) = gloss {
            desc.push(' ');
            desc.push_str(gloss);
        }

        desc
    }
}

fn describe_stem(segment: &Segment) -> String {
    let [person, gender, number] = phi_fragments(segment);

    // Fixed fragment order: case and phi features precede the head word.
    let fragments = [
        segment.case.map(|c| c.label().to_string()),
        person,
        gender,
        number,
        segment.noun_state.map(|s| s.label().to_string()),
        segment.verb_form.map(|f| format!("(form {})", f.value())),
        segment.verb_voice.map(|v| v.label().to_string()),
        segment.verb_aspect.map(|a| a.label().to_string()),
        Some(segment.name.clone()),
    ];

    join_present(fragments)
}

fn describe_suffix(segment: &Segment) -> String {
    let mut fragments = Vec::with_capacity(4);

    // A subject pronoun's phi features repeat those of the verb it attaches
    // to, so they are suppressed rather than stated twice.
    if segment.pronoun_type() != Some(PronounType::Subject) {
        fragments.extend(phi_fragments(segment));
    }
    fragments.push(Some(segment.name.clone()));

    join_present(fragments)
}

/// The person/gender/number fragments, in the order they appear in
/// descriptions. Shared between the stem and suffix branches.
fn phi_fragments(segment: &Segment) -> [Option<String>; 3] {
    [
        segment.person.map(|p| p.label().to_string()),
        segment.gender.map(|g| g.label().to_string()),
        segment.number.map(|n| n.label().to_string()),
    ]
}

/// Joins the fragments that are present with single spaces.
fn join_present(fragments: impl IntoIterator<Item = Option<String>>) -> String {
    fragments
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}
