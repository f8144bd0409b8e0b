//! Basmala example: describes every segment of the opening formula
//! "bismillahi alrrahmani alrraheemi", word by word, from raw corpus rows.
//!
//! Run with: cargo run --example basmala

use morphology_engine::core::annotation::parse_segment;
use morphology_engine::core::descriptor::Descriptor;
use morphology_engine::core::gloss::GlossTable;

fn main() {
    // Built-in glosses extended with the shipped table.
    let extra = GlossTable::load_from_ron(std::path::Path::new("data/glosses.ron"))
        .expect("Failed to load data/glosses.ron");
    let mut glosses = GlossTable::default();
    glosses.merge(extra);

    let descriptor = Descriptor::with_glosses(glosses);

    // (word, tag, features) per segment, as annotated in the corpus.
    let rows = [
        ("bi", "P", "PREFIX|bi+"),
        ("somi", "N", "STEM|POS:N|LEM:{som|ROOT:smw|M|GEN"),
        ("{ll~ahi", "PN", "STEM|POS:PN|LEM:{ll~ah|ROOT:Alh|GEN"),
        ("{l", "DET", "PREFIX|Al+"),
        ("r~aHoma`ni", "ADJ", "STEM|POS:ADJ|LEM:r~aHoma`n|ROOT:rHm|MS|GEN"),
        ("{l", "DET", "PREFIX|Al+"),
        ("r~aHiymi", "ADJ", "STEM|POS:ADJ|LEM:r~aHiym|ROOT:rHm|MS|GEN"),
    ];

    println!("=== The Basmala, segment by segment ===\n");

    for (form, tag, features) in rows {
        let segment = parse_segment(tag, features).expect("corpus row should parse");
        let description = descriptor.describe(&segment);
        println!("{:>12}  {}", form, description);
    }
}
