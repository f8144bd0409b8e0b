//! Describe: interactive shell for generating segment descriptions.
//!
//! Usage: describe [--glosses <path>] [<tag> <features>]...
//!
//! With positional arguments, each `<tag> <features>` pair is described and
//! the program exits. Without them, an interactive prompt reads one
//! `<tag> <features>` row per line.

use morphology_engine::core::annotation::parse_segment;
use morphology_engine::core::descriptor::Descriptor;
use morphology_engine::core::gloss::GlossTable;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        return;
    }

    let mut glosses_path = None;
    let mut rows: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--glosses" if i + 1 < args.len() => {
                i += 1;
                glosses_path = Some(args[i].clone());
            }
            arg if arg.starts_with("--") => {
                eprintln!("Unknown argument: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            arg => {
                rows.push(arg.to_string());
            }
        }
        i += 1;
    }

    let mut glosses = GlossTable::default();
    if let Some(ref path) = glosses_path {
        match GlossTable::load_from_ron(Path::new(path)) {
            Ok(extra) => {
                println!("Loaded glosses: {}", path);
                glosses.merge(extra);
            }
            Err(e) => {
                eprintln!("ERROR loading glosses {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }

    let descriptor = Descriptor::with_glosses(glosses);

    // One-shot mode: pairs of <tag> <features> from the command line.
    if !rows.is_empty() {
        if rows.len() % 2 != 0 {
            eprintln!("Expected <tag> <features> pairs, got {} arguments", rows.len());
            print_usage();
            std::process::exit(1);
        }
        for pair in rows.chunks(2) {
            describe_row(&descriptor, &pair[0], &pair[1]);
        }
        return;
    }

    println!("Type a row as '<tag> <features>', or 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("describe> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            _ => {
                let mut parts = line.splitn(2, char::is_whitespace);
                let tag = parts.next().unwrap_or_default();
                match parts.next() {
                    Some(features) => describe_row(&descriptor, tag, features.trim()),
                    None => {
                        println!("Usage: <tag> <features>");
                        println!("Example: N STEM|POS:N|LEM:{{som|ROOT:smw|M|GEN");
                    }
                }
            }
        }
    }
}

fn describe_row(descriptor: &Descriptor, tag: &str, features: &str) {
    match parse_segment(tag, features) {
        Ok(segment) => println!("{}", descriptor.describe(&segment)),
        Err(e) => eprintln!("ERROR: {}", e),
    }
}

fn print_usage() {
    println!("Describe: interactive shell for generating segment descriptions.");
    println!();
    println!("Usage: describe [--glosses <path>] [<tag> <features>]...");
    println!();
    println!("  --glosses <path>   RON gloss table merged over the built-in defaults");
    println!();
    println!("Example:");
    println!("  describe P 'PREFIX|bi+' N 'STEM|POS:N|LEM:{{som|ROOT:smw|M|GEN'");
}

fn print_help() {
    println!("Commands:");
    println!("  <tag> <features>   Describe one corpus row");
    println!("  help               Show this help");
    println!("  quit               Exit");
    println!();
    println!("Rows: tag is the part-of-speech column (N, V, P, CONJ, PRON, ...);");
    println!("features is the pipe-delimited annotation, starting with");
    println!("PREFIX, STEM, or SUFFIX.");
}
