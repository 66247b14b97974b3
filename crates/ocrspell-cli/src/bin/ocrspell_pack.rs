// ocrspell-pack: Pack a word list into a words.dawg word graph.
//
// Reads one word per line from FILE (or stdin), lowercases it and writes
// the packed graph. Lines with characters outside a-z are skipped with a
// warning.
//
// Usage:
//   ocrspell-pack [-o OUTPUT] [FILE]
//
// Options:
//   -o, --output PATH   Output file (default: words.dawg)
//   -h, --help          Print help

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use ocrspell_dawg::builder::GraphBuilder;
use ocrspell_dawg::DawgError;

fn main() {
    ocrspell_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if ocrspell_cli::wants_help(&args) {
        println!("ocrspell-pack: Pack a word list into a word graph.");
        println!();
        println!("Usage: ocrspell-pack [-o OUTPUT] [FILE]");
        println!();
        println!("Reads one word per line from FILE, or stdin if no FILE is given.");
        println!();
        println!("Options:");
        println!("  -o, --output PATH   Output file (default: {})", ocrspell_cli::WORDS_DAWG);
        println!("  -h, --help          Print this help");
        return;
    }

    let (output, args) = ocrspell_cli::take_option(&args, "-o", "--output");
    let output = output.map_or_else(|| PathBuf::from(ocrspell_cli::WORDS_DAWG), PathBuf::from);

    let text = match args.first() {
        Some(file) => ocrspell_cli::read_or_exit(Path::new(file)),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .unwrap_or_else(|e| ocrspell_cli::fatal(&format!("error reading stdin: {e}")));
            text
        }
    };

    let mut builder = GraphBuilder::new();
    let mut skipped = 0usize;
    for line in text.lines() {
        let word = line.trim().to_lowercase();
        match builder.insert(&word) {
            Ok(()) => {}
            Err(DawgError::InvalidLetter { word, ch }) => {
                log::warn!("skipping {word:?}: cannot pack {ch:?}");
                skipped += 1;
            }
            Err(e) => ocrspell_cli::fatal(&e.to_string()),
        }
    }

    let word_count = builder.word_count();
    let graph = builder
        .finish()
        .unwrap_or_else(|e| ocrspell_cli::fatal(&format!("failed to pack words: {e}")));

    std::fs::write(&output, graph.to_bytes())
        .unwrap_or_else(|e| ocrspell_cli::fatal(&format!("failed to write {}: {e}", output.display())));

    eprintln!(
        "packed {} words ({} edges) into {}{}",
        word_count,
        graph.edge_count(),
        output.display(),
        if skipped > 0 {
            format!(", skipped {skipped}")
        } else {
            String::new()
        }
    );
}
