//! English word list used as the plausibility oracle.
//!
//! A [`Lexicon`] is read-only after construction and is meant to be built
//! once and shared across every scoring call.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::CrackError;

/// Ratio of recognised words at which [`Lexicon::is_english`] accepts a text.
///
/// Independent of the cracker's own confidence thresholds.
pub const ENGLISH_THRESHOLD: f64 = 0.8;

/// Word list embedded at build time.
const EMBEDDED_WORDS: &str = include_str!("../data/english_words.txt");

/// Case-insensitive set of known English words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Builds a lexicon from an iterator of words.
    ///
    /// Words are trimmed and uppercased; blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Lexicon { words }
    }

    /// Loads a word list with one word per line.
    ///
    /// # Errors
    /// Returns [`CrackError::LexiconIo`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CrackError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| CrackError::LexiconIo {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let lexicon = Self::from_words(contents.lines());
        tracing::debug!(path = %path.display(), words = lexicon.len(), "loaded word list");
        Ok(lexicon)
    }

    /// Returns the embedded English word list.
    pub fn english() -> Self {
        Self::from_words(EMBEDDED_WORDS.lines())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the lexicon has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Counts the whitespace-separated words of `text` found in the lexicon.
    pub fn count_matches(&self, text: &str) -> usize {
        text.split_whitespace().filter(|w| self.contains(w)).count()
    }

    /// Fraction of the words of `text` found in the lexicon.
    ///
    /// Returns `0.0` for text without words.
    pub fn english_ratio(&self, text: &str) -> f64 {
        let total = text.split_whitespace().count();
        if total == 0 {
            return 0.0;
        }
        self.count_matches(text) as f64 / total as f64
    }

    /// Returns `true` if at least [`ENGLISH_THRESHOLD`] of the words are known.
    pub fn is_english(&self, text: &str) -> bool {
        self.english_ratio(text) >= ENGLISH_THRESHOLD
    }
}
