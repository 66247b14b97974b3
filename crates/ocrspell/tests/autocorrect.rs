//! End-to-end tests: pack a word list, load it from disk together with a
//! user-word file, and autocorrect the fixture sentences.
//!
//! Fixtures live in `tests/data/`:
//! - `wordlist.txt`: words packed into the test word graph
//! - `user_words.txt`: user words loaded on top
//! - `autocorrect_cases.json`: `[{ "input": ..., "expected": ... }]`

use std::path::PathBuf;

use ocrspell::{Lexicon, LexiconError, SpellChecker};
use ocrspell_dawg::{DawgError, build_word_graph};
use serde_json::Value;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn load_wordlist() -> Vec<String> {
    let path = data_path("wordlist.txt");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

/// Pack the word list into a resource file and return its path.
fn write_packed_wordlist(name: &str) -> PathBuf {
    let graph = build_word_graph(load_wordlist()).expect("word list packs");
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::write(&path, graph.to_bytes())
        .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
    path
}

fn create_checker() -> SpellChecker {
    let packed = write_packed_wordlist("autocorrect-words.dawg");
    SpellChecker::from_files(&packed, Some(&data_path("user_words.txt")))
        .unwrap_or_else(|e| panic!("failed to create SpellChecker: {}", e))
}

#[test]
fn fixture_sentences_are_corrected() {
    let checker = create_checker();
    let path = data_path("autocorrect_cases.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    let cases: Value = serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e));

    let cases = cases.as_array().expect("fixture is an array");
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in cases {
        let input = case["input"].as_str().expect("input is a string");
        let expected = case["expected"].as_str().expect("expected is a string");
        let actual = checker.auto_correct(input);
        if actual != expected {
            failures.push(format!("{input:?}: expected {expected:?}, got {actual:?}"));
        }
    }
    assert!(failures.is_empty(), "mismatches:\n{}", failures.join("\n"));
}

#[test]
fn every_packed_word_is_known_and_kept() {
    let checker = create_checker();
    for word in load_wordlist() {
        assert!(checker.lexicon().contains_word(&word), "missing {word}");
        assert_eq!(checker.suggestion(&word, 1).as_deref(), Some(word.as_str()));
    }
}

#[test]
fn user_words_are_loaded_lowercase() {
    let checker = create_checker();
    let lexicon = checker.lexicon();
    assert!(lexicon.contains_word("android"));
    assert!(lexicon.contains_word("OCR"));
    assert_eq!(
        lexicon.user_words().iter().collect::<Vec<_>>(),
        vec!["android", "braille", "ocr"]
    );
    assert_eq!(lexicon.size(), None);
}

#[test]
fn resource_without_magic_fails_to_load() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("not-a-graph.dawg");
    std::fs::write(&path, b"WORD:1:4:\0\0\0\0").unwrap();
    let err = Lexicon::from_files(Some(&path), None).unwrap_err();
    assert!(matches!(err, LexiconError::Graph(DawgError::InvalidMagic)));
}

#[test]
fn packed_file_round_trips_through_reader() {
    let packed = write_packed_wordlist("reader-words.dawg");
    let file = std::fs::File::open(&packed).unwrap();
    let graph = ocrspell_dawg::WordGraph::from_reader(file).unwrap();
    let mut words = load_wordlist();
    words.sort();
    words.dedup();
    assert_eq!(graph.words(), words);
}
