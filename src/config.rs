//! Tunable constants of the cracking pipeline.
//!
//! [`CrackerConfig::default`] reproduces the classic settings; individual
//! values can be overridden with the `with_*` builders or deserialized from
//! any serde format.

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::cipher;
use crate::error::CrackError;

/// Default sequence length scanned by Kasiski examination.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 3;

/// Default number of Kasiski key-length candidates kept.
pub const DEFAULT_KASISKI_CANDIDATES: usize = 5;

/// Default number of keys a single brute-force run may evaluate.
pub const DEFAULT_SEARCH_BUDGET: usize = 100;

/// Longest key length brute force accepts.
pub const DEFAULT_MAX_BRUTE_FORCE_LENGTH: usize = 7;

/// Key lengths up to this value are brute-forced over all 26 letters.
pub const DEFAULT_FULL_ALPHABET_MAX_LENGTH: usize = 3;

/// Candidate lengths above this value are not brute-forced by the cracker.
pub const DEFAULT_BRUTE_FORCE_LENGTH_CUTOFF: usize = 5;

/// Confidence above which a common key ends the attack immediately.
pub const DEFAULT_KNOWN_KEY_THRESHOLD: f64 = 0.5;

/// Confidence below which brute force is attempted.
pub const DEFAULT_BRUTE_FORCE_TRIGGER: f64 = 0.3;

/// Letters tried per position for longer brute-force keys, most frequent first.
pub const DEFAULT_COMMON_LETTERS: &str = "ETAOINSHRDLUCMFWYP";

/// Keys tried before any analysis.
pub const DEFAULT_COMMON_KEYS: [&str; 7] = [
    "CRYPTO", "SECRET", "KEY", "CIPHER", "PASSWORD", "CODE", "VIGENERE",
];

/// Weights of the most common English letters used to score a column shift.
pub const DEFAULT_FREQUENCY_WEIGHTS: [(char, f64); 6] = [
    ('E', 0.12),
    ('T', 0.09),
    ('A', 0.08),
    ('O', 0.07),
    ('I', 0.07),
    ('N', 0.07),
];

/// How ciphertext letters are assigned to columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnAlignment {
    /// Column = position in the ciphertext mod key length. Ciphertext spaces
    /// are skipped but still advance the position, so every column stays on
    /// a single key symbol.
    #[default]
    CipherPosition,
    /// Column = index among ciphertext letters only, mod key length.
    LetterProjection,
}

/// Configuration for [`Cracker`](crate::Cracker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrackerConfig {
    /// Letter weights summed by the column frequency solver.
    pub frequency_weights: Vec<(char, f64)>,
    /// Keys tried first, in order.
    pub common_keys: Vec<String>,
    /// Ordered letter subset for brute-forcing keys longer than
    /// `full_alphabet_max_length`.
    pub common_letters: String,
    /// Key lengths always tried, after the Kasiski candidates.
    pub default_key_lengths: Vec<usize>,
    /// Window length for repeated-sequence scanning.
    pub sequence_length: usize,
    /// Number of ranked Kasiski key lengths kept.
    pub kasiski_candidates: usize,
    /// Maximum number of keys evaluated by one brute-force run.
    pub search_budget: usize,
    /// Longest key length brute force accepts.
    pub max_brute_force_length: usize,
    /// Longest key length brute-forced over the full alphabet.
    pub full_alphabet_max_length: usize,
    /// Longest candidate key length the cracker hands to brute force.
    pub brute_force_length_cutoff: usize,
    /// Known-key confidence that ends the attack early (strictly greater).
    pub known_key_threshold: f64,
    /// Confidence below which brute force runs (strictly less).
    pub brute_force_trigger: f64,
    /// Column assignment used by frequency analysis.
    pub column_alignment: ColumnAlignment,
}

impl Default for CrackerConfig {
    fn default() -> Self {
        CrackerConfig {
            frequency_weights: DEFAULT_FREQUENCY_WEIGHTS.to_vec(),
            common_keys: DEFAULT_COMMON_KEYS.iter().map(|k| k.to_string()).collect(),
            common_letters: DEFAULT_COMMON_LETTERS.to_string(),
            default_key_lengths: (3..=7).collect(),
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            kasiski_candidates: DEFAULT_KASISKI_CANDIDATES,
            search_budget: DEFAULT_SEARCH_BUDGET,
            max_brute_force_length: DEFAULT_MAX_BRUTE_FORCE_LENGTH,
            full_alphabet_max_length: DEFAULT_FULL_ALPHABET_MAX_LENGTH,
            brute_force_length_cutoff: DEFAULT_BRUTE_FORCE_LENGTH_CUTOFF,
            known_key_threshold: DEFAULT_KNOWN_KEY_THRESHOLD,
            brute_force_trigger: DEFAULT_BRUTE_FORCE_TRIGGER,
            column_alignment: ColumnAlignment::default(),
        }
    }
}

impl CrackerConfig {
    /// Replaces the common-key list.
    pub fn with_common_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the brute-force budget.
    pub fn with_search_budget(mut self, budget: usize) -> Self {
        self.search_budget = budget;
        self
    }

    /// Sets the known-key early-exit threshold.
    pub fn with_known_key_threshold(mut self, threshold: f64) -> Self {
        self.known_key_threshold = threshold;
        self
    }

    /// Sets the brute-force trigger threshold.
    pub fn with_brute_force_trigger(mut self, threshold: f64) -> Self {
        self.brute_force_trigger = threshold;
        self
    }

    /// Replaces the default key lengths.
    pub fn with_default_key_lengths(mut self, lengths: impl IntoIterator<Item = usize>) -> Self {
        self.default_key_lengths = lengths.into_iter().collect();
        self
    }

    /// Sets the longest candidate key length handed to brute force.
    pub fn with_brute_force_length_cutoff(mut self, cutoff: usize) -> Self {
        self.brute_force_length_cutoff = cutoff;
        self
    }

    /// Sets the column alignment.
    pub fn with_column_alignment(mut self, alignment: ColumnAlignment) -> Self {
        self.column_alignment = alignment;
        self
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    /// Returns [`CrackError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CrackError> {
        let invalid = |msg: &str| Err(CrackError::InvalidConfig(msg.to_string()));

        for threshold in [self.known_key_threshold, self.brute_force_trigger] {
            if !(0.0..=1.0).contains(&threshold) {
                return invalid("thresholds must lie in [0, 1]");
            }
        }
        if self.search_budget == 0 {
            return invalid("search_budget must be at least 1");
        }
        if self.sequence_length < 2 {
            return invalid("sequence_length must be at least 2");
        }
        if self.kasiski_candidates == 0 {
            return invalid("kasiski_candidates must be at least 1");
        }
        if self.common_letters.is_empty() || !self.common_letters.chars().all(alphabet::is_letter)
        {
            return invalid("common_letters must be a non-empty run of A-Z");
        }
        if self.default_key_lengths.is_empty() || self.default_key_lengths.contains(&0) {
            return invalid("default_key_lengths must be non-empty and positive");
        }
        if self
            .frequency_weights
            .iter()
            .any(|&(c, w)| !alphabet::is_letter(c) || !w.is_finite() || w < 0.0)
        {
            return invalid("frequency_weights must map A-Z to non-negative weights");
        }
        if self
            .common_keys
            .iter()
            .any(|k| cipher::key_shifts(k).is_err())
        {
            return invalid("common_keys must be non-empty alphabet strings");
        }
        Ok(())
    }
}
