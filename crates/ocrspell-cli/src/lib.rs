// ocrspell-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use ocrspell::{Lexicon, LexiconError, SpellChecker};

/// Packed word graph file name.
pub const WORDS_DAWG: &str = "words.dawg";

/// Optional plain-text user-word file name.
pub const USER_WORDS: &str = "user_words.txt";

/// Environment variable naming the dictionary directory.
const DICT_PATH_ENV: &str = "OCRSPELL_DICT_PATH";

/// Initialise `env_logger`, defaulting to warnings only.
///
/// `RUST_LOG` overrides the default, e.g. `RUST_LOG=ocrspell=trace`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Search for dictionary files and create a `SpellChecker`.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `OCRSPELL_DICT_PATH` environment variable
/// 3. `~/.ocrspell`
/// 4. `/usr/share/ocrspell`
/// 5. Current working directory
///
/// The first directory containing `words.dawg` wins; `user_words.txt` next
/// to it is loaded too when present.
pub fn load_checker(dict_path: Option<&str>) -> Result<SpellChecker, String> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        let words_path = dir.join(WORDS_DAWG);
        if !words_path.is_file() {
            continue;
        }
        let user_path = dir.join(USER_WORDS);
        let user_path = user_path.is_file().then_some(user_path);

        log::debug!("using dictionary directory {}", dir.display());
        let lexicon = Lexicon::from_files(Some(&words_path), user_path.as_deref())
            .map_err(|e: LexiconError| format!("failed to load dictionary: {e}"))?;
        return Ok(SpellChecker::new(lexicon));
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        WORDS_DAWG,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".ocrspell"));
    }

    paths.push(PathBuf::from("/usr/share/ocrspell"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "-d", "--dict-path")
}

/// Remove a valued option (`-x VALUE`, `--long VALUE` or `--long=VALUE`)
/// from `args`. The last occurrence wins.
///
/// Returns `(value, remaining_args)`.
pub fn take_option(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let long_eq = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == short || arg == long {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Read a file fully or exit with an error naming it.
pub fn read_or_exit(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| fatal(&format!("failed to read {}: {e}", path.display())))
}
