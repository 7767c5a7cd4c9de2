//! Decryption scorer.
//!
//! Decrypts the ciphertext under a candidate key and rates the result by the
//! fraction of its words found in the [`Lexicon`]. A malformed key is not an
//! error here: it simply carries no information and scores 0.

use serde::{Deserialize, Serialize};

use crate::alphabet::normalize;
use crate::cipher;
use crate::lexicon::Lexicon;

/// A candidate key together with its decryption and confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Candidate key.
    pub key: String,
    /// Ciphertext decrypted with `key`; empty when the key was malformed.
    pub plaintext: String,
    /// Recognised words / max(1, word count), in `[0, 1]`.
    pub confidence: f64,
}

impl ScoredCandidate {
    /// Returns `true` if `self` strictly beats `best`. Nothing beats a
    /// missing best unless it has positive confidence.
    pub fn improves_on(&self, best: Option<&ScoredCandidate>) -> bool {
        self.confidence > best.map_or(0.0, |b| b.confidence)
    }
}

/// Scores candidate keys against one ciphertext.
#[derive(Debug, Clone)]
pub struct Oracle<'a> {
    ciphertext: String,
    lexicon: &'a Lexicon,
}

impl<'a> Oracle<'a> {
    /// Creates an oracle for `ciphertext`, normalizing it once.
    pub fn new(ciphertext: &str, lexicon: &'a Lexicon) -> Self {
        Oracle {
            ciphertext: normalize(ciphertext),
            lexicon,
        }
    }

    /// The normalized ciphertext being attacked.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Decrypts with `key` and scores the plaintext.
    ///
    /// Never fails: a key that cannot be used yields confidence 0 and an
    /// empty plaintext.
    pub fn score(&self, key: &str) -> ScoredCandidate {
        let shifts = match cipher::key_shifts(key) {
            Ok(shifts) => shifts,
            Err(err) => {
                tracing::debug!(key = %key, error = %err, "unusable candidate key");
                return ScoredCandidate {
                    key: key.to_string(),
                    plaintext: String::new(),
                    confidence: 0.0,
                };
            }
        };
        let plaintext = cipher::decrypt_with_shifts(&self.ciphertext, &shifts);
        let confidence = self.lexicon.english_ratio(&plaintext);
        ScoredCandidate {
            key: key.to_string(),
            plaintext,
            confidence,
        }
    }
}
