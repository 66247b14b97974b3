// ocrspell-suggest: Print the best correction for words.
//
// Usage:
//   ocrspell-suggest [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Dictionary directory containing words.dawg
//   -t, --threshold N      Maximum number of edits (default: 1)
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use ocrspell::SpellChecker;

fn suggest_word(checker: &SpellChecker, word: &str, threshold: usize, out: &mut impl Write) {
    match checker.suggestion(word, threshold) {
        Some(s) if s == word => {
            let _ = writeln!(out, "{word} (correct)");
        }
        Some(s) => {
            let _ = writeln!(out, "{word}: {s}");
        }
        None => {
            let _ = writeln!(out, "{word}: (no suggestion)");
        }
    }
}

fn main() {
    ocrspell_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = ocrspell_cli::parse_dict_path(&args);

    if ocrspell_cli::wants_help(&args) {
        println!("ocrspell-suggest: Print the best correction for words.");
        println!();
        println!("Usage: ocrspell-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary directory containing words.dawg");
        println!("  -t, --threshold N      Maximum number of edits (default: 1)");
        println!("  -h, --help             Print this help");
        return;
    }

    let (threshold, args) = ocrspell_cli::take_option(&args, "-t", "--threshold");
    let threshold: usize = match threshold {
        Some(t) => t
            .parse()
            .unwrap_or_else(|_| ocrspell_cli::fatal("invalid number for --threshold")),
        None => ocrspell::suggestion::EDIT_THRESHOLD,
    };
    if threshold > 2 {
        log::warn!("threshold {threshold} may take very long: cost grows exponentially");
    }

    let words: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let checker = ocrspell_cli::load_checker(dict_path.as_deref())
        .unwrap_or_else(|e| ocrspell_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
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
            suggest_word(&checker, word, threshold, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(&checker, word, threshold, &mut out);
        }
    }
}
