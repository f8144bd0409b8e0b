//! Morphology Engine: grammatical descriptions of analysed Arabic corpus text.
//!
//! Turns tagged morphological segments (the prefix, stem, and suffix units of
//! an analysed word) into fixed-template English phrases such as
//! "genitive masculine noun" or "prefixed preposition {bi}", for display next
//! to the word in a corpus viewer.

pub mod core;
pub mod schema;
