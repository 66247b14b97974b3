// ocrspell-correct: Autocorrect OCR text from stdin.
//
// Each input line is corrected independently and written to stdout.
// Words that cannot be corrected are dropped from the output line.
//
// Usage:
//   ocrspell-correct [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary directory containing words.dawg
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    ocrspell_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = ocrspell_cli::parse_dict_path(&args);

    if ocrspell_cli::wants_help(&args) {
        println!("ocrspell-correct: Autocorrect OCR text from stdin.");
        println!();
        println!("Usage: ocrspell-correct [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Corrects each stdin line and prints the result.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary directory containing words.dawg");
        println!("  -h, --help             Print this help");
        return;
    }

    let checker = ocrspell_cli::load_checker(dict_path.as_deref())
        .unwrap_or_else(|e| ocrspell_cli::fatal(&e));

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
        let _ = writeln!(out, "{}", checker.auto_correct(&line));
    }
}
