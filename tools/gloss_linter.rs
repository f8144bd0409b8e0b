//! Gloss Linter: validates a RON gloss table file.
//!
//! Usage: gloss_linter <glosses.ron>

use morphology_engine::core::gloss::GlossTable;
use rustc_hash::FxHashMap;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: gloss_linter <glosses.ron>");
        process::exit(0);
    }

    let path = Path::new(&args[1]);
    let table = match GlossTable::load_from_ron(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("ERROR: Failed to load gloss table: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Loaded {} preposition and {} conjunction glosses",
        table.prepositions.len(),
        table.conjunctions.len()
    );

    let (errors, warnings) = lint_table(&table);

    println!("\n=== Gloss Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_table(table: &GlossTable) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let sections: [(&str, &FxHashMap<String, String>); 2] = [
        ("prepositions", &table.prepositions),
        ("conjunctions", &table.conjunctions),
    ];

    for (section, entries) in sections {
        for (lemma, gloss) in entries {
            if lemma.is_empty() {
                errors.push(format!("{}: empty lemma key", section));
            }
            if lemma.chars().any(char::is_whitespace) {
                errors.push(format!(
                    "{}: lemma '{}' contains whitespace and can never match",
                    section, lemma
                ));
            }
            if gloss.is_empty() {
                errors.push(format!("{}: lemma '{}' has an empty gloss", section, lemma));
            } else if !gloss.starts_with('{') {
                warnings.push(format!(
                    "{}: gloss '{}' for lemma '{}' does not start with a {{...}} transliteration",
                    section, gloss, lemma
                ));
            }
        }
    }

    // A lemma glossed in both sections is usually a curation mistake: the
    // descriptor consults exactly one table per part of speech.
    for lemma in table.prepositions.keys() {
        if table.conjunctions.contains_key(lemma) {
            warnings.push(format!(
                "lemma '{}' appears in both prepositions and conjunctions",
                lemma
            ));
        }
    }

    (errors, warnings)
}
