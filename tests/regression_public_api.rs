//! Regression tests for the public API.
//!
//! Each section exercises one module through the crate's public paths only,
//! the way a downstream user would.
//!
//! Coverage:
//! - `alphabet`
//! - `cipher`
//! - `caesar`
//! - `lexicon::Lexicon`
//! - `config::CrackerConfig`
//! - `analysis::{kasiski, columns, oracle, brute_force}`
//! - `error::CrackError`

use std::io::Write;

use vigenere_crack::alphabet::{self, normalize, ALPHABET};
use vigenere_crack::analysis::brute_force::brute_force_key;
use vigenere_crack::analysis::columns::{determine_key, solve_column, split_into_columns};
use vigenere_crack::analysis::kasiski::{estimate_key_lengths, find_repeated_sequences};
use vigenere_crack::analysis::oracle::Oracle;
use vigenere_crack::{caesar, cipher};
use vigenere_crack::{ColumnAlignment, CrackError, CrackerConfig, Lexicon};

const SAMPLE: &str = "I love to study cryptography as I want to become crypto and AI engineer";

// ═══════════════════════════════════════════════════════════════════════
// alphabet + cipher
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn alphabet_order_is_space_then_letters() {
    assert_eq!(ALPHABET, " ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    assert_eq!(alphabet::index_of(' '), Some(0));
    assert_eq!(alphabet::index_of('Z'), Some(26));
}

/// Frozen ciphertext for the reference sample; any change means the key
/// schedule or the alphabet order changed.
#[test]
fn cipher_frozen_vector() {
    let ciphertext = cipher::encrypt("ATTACK AT DAWN", "LEMON").unwrap();
    assert_eq!(ciphertext, "MYFPQWENHNPFIB");
    assert_eq!(
        cipher::decrypt(&ciphertext, "LEMON").unwrap(),
        "ATTACK AT DAWN"
    );
}

#[test]
fn cipher_roundtrip_normalizes_text() {
    for key in ["CRYPTO", "a", "Secret Key", "Z"] {
        let ciphertext = cipher::encrypt(SAMPLE, key).unwrap();
        assert_eq!(
            cipher::decrypt(&ciphertext, key).unwrap(),
            normalize(SAMPLE),
            "roundtrip failed for key {:?}",
            key
        );
    }
}

#[test]
fn cipher_rejects_bad_keys() {
    assert_eq!(cipher::encrypt(SAMPLE, ""), Err(CrackError::EmptyKey));
    assert_eq!(
        cipher::encrypt(SAMPLE, "KEY-1"),
        Err(CrackError::InvalidKeySymbol('-'))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// caesar
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn caesar_matches_single_letter_vigenere() {
    // shift 3 is the key symbol 'C'
    assert_eq!(
        caesar::encrypt(SAMPLE, 3).unwrap(),
        cipher::encrypt(SAMPLE, "C").unwrap()
    );
}

#[test]
fn caesar_crack_with_embedded_lexicon() {
    let lexicon = Lexicon::english();
    let ciphertext = caesar::encrypt("my name is mister black", 11).unwrap();
    let (shift, plaintext) = caesar::crack_with_lexicon(&ciphertext, &lexicon).unwrap();
    assert_eq!(shift, 11);
    assert_eq!(plaintext, "MY NAME IS MISTER BLACK");
}

// ═══════════════════════════════════════════════════════════════════════
// lexicon
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn lexicon_loads_word_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "alpha").unwrap();
    writeln!(file, "Beta").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  GAMMA  ").unwrap();

    let lexicon = Lexicon::load(file.path()).unwrap();
    assert_eq!(lexicon.len(), 3);
    assert_eq!(lexicon.count_matches("ALPHA beta delta gamma"), 3);
    assert!(!lexicon.is_english("alpha delta epsilon"));
    assert!(lexicon.is_english("alpha beta gamma"));
}

#[test]
fn lexicon_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    match Lexicon::load(&path) {
        Err(CrackError::LexiconIo { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected LexiconIo, got {:?}", other),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// config
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn config_json_roundtrip() {
    let config = CrackerConfig::default()
        .with_search_budget(250)
        .with_column_alignment(ColumnAlignment::LetterProjection);
    let json = serde_json::to_string(&config).unwrap();
    let restored: CrackerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn config_partial_json_uses_defaults() {
    let config: CrackerConfig =
        serde_json::from_str(r#"{"search_budget": 40, "column_alignment": "letter_projection"}"#)
            .unwrap();
    assert_eq!(config.search_budget, 40);
    assert_eq!(config.column_alignment, ColumnAlignment::LetterProjection);
    assert_eq!(config.known_key_threshold, 0.5);
    assert_eq!(config.brute_force_trigger, 0.3);
    assert!(config.validate().is_ok());
}

// ═══════════════════════════════════════════════════════════════════════
// analysis
// ═══════════════════════════════════════════════════════════════════════

/// A 3-letter sequence repeated at spacings 6 and 12 must put 6 among the
/// key-length candidates.
#[test]
fn kasiski_detects_engineered_spacing() {
    let repeats = find_repeated_sequences("KQZABCKQZDEFGHIJLMKQZ", 3);
    let lengths = estimate_key_lengths(&repeats, 5, &[3, 4, 5, 6, 7]);
    assert!(lengths.len() <= 5);
    assert!(lengths.contains(&6), "candidates were {:?}", lengths);
}

#[test]
fn kasiski_on_real_ciphertext_finds_key_length() {
    let plaintext = "we attack at dawn and we attack at dusk and then we attack again at noon";
    let ciphertext = cipher::encrypt(plaintext, "ABCDE").unwrap();
    let repeats = find_repeated_sequences(&ciphertext, 3);
    assert!(!repeats.is_empty());
    for repeat in &repeats {
        for spacing in repeat.spacings() {
            assert!(spacing > 0);
        }
    }
    let lengths = estimate_key_lengths(&repeats, 5, &[3, 4, 5, 6, 7]);
    assert_eq!(lengths, vec![5, 10, 15, 20]);
}

#[test]
fn columns_rejoin_letter_projection() {
    let text = normalize(SAMPLE);
    let letters: String = text.chars().filter(|c| *c != ' ').collect();
    for key_length in 1..=9 {
        for alignment in [
            ColumnAlignment::CipherPosition,
            ColumnAlignment::LetterProjection,
        ] {
            let split = split_into_columns(&text, key_length, alignment).unwrap();
            assert_eq!(split.key_length(), key_length);
            assert_eq!(split.rejoin(), letters);
        }
    }
}

#[test]
fn frequency_solver_is_deterministic() {
    let config = CrackerConfig::default();
    let column = cipher::encrypt("EEEETTTAAOIN", "Q").unwrap();
    let first = solve_column(&column, &config.frequency_weights);
    let second = solve_column(&column, &config.frequency_weights);
    assert_eq!(first, second);
    assert_eq!(first, alphabet::index_of('Q').unwrap());
}

#[test]
fn frequency_solver_recovers_key_from_columns() {
    let config = CrackerConfig::default();
    let plaintext = "the enemy attacks at dawn from the eastern ridge and then retreats to the forest";
    let ciphertext = cipher::encrypt(plaintext, "DOG").unwrap();
    let split = split_into_columns(&ciphertext, 3, config.column_alignment).unwrap();
    assert_eq!(determine_key(&split, &config.frequency_weights), "DOG");
}

#[test]
fn oracle_reports_malformed_key_as_zero() {
    let lexicon = Lexicon::english();
    let ciphertext = cipher::encrypt(SAMPLE, "CRYPTO").unwrap();
    let oracle = Oracle::new(&ciphertext, &lexicon);
    let scored = oracle.score("CRYPT0");
    assert_eq!(scored.confidence, 0.0);
    assert!(scored.plaintext.is_empty());
}

#[test]
fn brute_force_respects_budget() {
    let lexicon = Lexicon::english();
    let ciphertext = cipher::encrypt(SAMPLE, "HELP").unwrap();
    let oracle = Oracle::new(&ciphertext, &lexicon);
    for budget in [1, 17, 100, 1000] {
        let config = CrackerConfig::default().with_search_budget(budget);
        for key_length in 1..=7 {
            let report = brute_force_key(&oracle, key_length, &config).unwrap();
            assert!(
                report.evaluated <= budget,
                "evaluated {} keys with budget {}",
                report.evaluated,
                budget
            );
            assert_eq!(report.key_length, key_length);
        }
        assert!(brute_force_key(&oracle, 8, &config).is_none());
    }
}
