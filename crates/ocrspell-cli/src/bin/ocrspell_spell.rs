// ocrspell-spell: Check words from stdin against the dictionary.
//
// Reads words from stdin (one per line) and reports whether each word
// is known:
//   C: word    (correct)
//   W: word    (wrong / unknown)
//
// Usage:
//   ocrspell-spell [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary directory containing words.dawg
//   -s, --suggest          Also print the suggestion for unknown words
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    ocrspell_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = ocrspell_cli::parse_dict_path(&args);

    if ocrspell_cli::wants_help(&args) {
        println!("ocrspell-spell: Check words from stdin against the dictionary.");
        println!();
        println!("Usage: ocrspell-spell [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (unknown)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary directory containing words.dawg");
        println!("  -s, --suggest          Also print the suggestion for unknown words");
        println!("  -h, --help             Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let checker = ocrspell_cli::load_checker(dict_path.as_deref())
        .unwrap_or_else(|e| ocrspell_cli::fatal(&e));
    let threshold = checker.options().edit_threshold;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if checker.lexicon().contains_word(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                if let Some(suggestion) = checker.suggestion(word, threshold) {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
