//! Cracker: multi-strategy attack on a 27-symbol Vigenère ciphertext.
//!
//! Strategies run in a fixed order and share one running best candidate:
//!
//! ```text
//! KnownKeyTrial ──(confidence > 0.5)──────────────────────────► done
//!      │
//! LengthEstimation (Kasiski candidates, then defaults 3..=7)
//!      │
//! FrequencyAnalysis (every candidate length)
//!      │
//! ConditionalBruteForce (only if best < 0.3; lengths <= 5) ────► done
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::normalize;
use crate::analysis::brute_force::brute_force_key;
use crate::analysis::columns::{determine_key, split_into_columns};
use crate::analysis::kasiski::{estimate_key_lengths, find_repeated_sequences, merge_key_lengths};
use crate::analysis::oracle::{Oracle, ScoredCandidate};
use crate::config::CrackerConfig;
use crate::error::CrackError;
use crate::lexicon::Lexicon;

/// Strategy that produced the final candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// A key from the common-key list.
    #[serde(rename = "known key pattern")]
    KnownKeyPattern,
    /// Kasiski examination plus per-column frequency analysis.
    #[serde(rename = "frequency analysis")]
    FrequencyAnalysis,
    /// Budgeted key enumeration.
    #[serde(rename = "brute force")]
    BruteForce,
    /// Nothing scored above zero.
    #[serde(rename = "none")]
    None,
}

impl Method {
    /// Human-readable method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::KnownKeyPattern => "known key pattern",
            Method::FrequencyAnalysis => "frequency analysis",
            Method::BruteForce => "brute force",
            Method::None => "none",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a cracking attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CrackOutcome {
    /// Some strategy produced a candidate with positive confidence.
    Cracked {
        /// Best candidate seen.
        candidate: ScoredCandidate,
        /// Strategy that produced it.
        method: Method,
    },
    /// No candidate ever scored above zero.
    NotFound,
}

impl CrackOutcome {
    /// Returns `true` for [`CrackOutcome::Cracked`].
    pub fn is_cracked(&self) -> bool {
        matches!(self, CrackOutcome::Cracked { .. })
    }

    /// Recovered key, if any.
    pub fn key(&self) -> Option<&str> {
        self.candidate().map(|c| c.key.as_str())
    }

    /// Recovered plaintext, if any.
    pub fn plaintext(&self) -> Option<&str> {
        self.candidate().map(|c| c.plaintext.as_str())
    }

    /// Confidence of the result; `0.0` when nothing was found.
    pub fn confidence(&self) -> f64 {
        self.candidate().map_or(0.0, |c| c.confidence)
    }

    /// Strategy that produced the result.
    pub fn method(&self) -> Method {
        match self {
            CrackOutcome::Cracked { method, .. } => *method,
            CrackOutcome::NotFound => Method::None,
        }
    }

    /// Best candidate, if any.
    pub fn candidate(&self) -> Option<&ScoredCandidate> {
        match self {
            CrackOutcome::Cracked { candidate, .. } => Some(candidate),
            CrackOutcome::NotFound => None,
        }
    }

    /// Flattens the outcome into a serializable record.
    pub fn to_record(&self) -> CrackRecord {
        CrackRecord {
            key: self.key().map(str::to_string),
            plaintext: self.plaintext().map(str::to_string),
            confidence: self.confidence(),
            method: self.method(),
        }
    }
}

/// Flat `{key, plaintext, confidence, method}` view of a [`CrackOutcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackRecord {
    /// Recovered key.
    pub key: Option<String>,
    /// Recovered plaintext.
    pub plaintext: Option<String>,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Strategy used.
    pub method: Method,
}

/// Running best candidate shared by all strategies.
#[derive(Debug, Default)]
struct Best {
    candidate: Option<ScoredCandidate>,
    method: Option<Method>,
}

impl Best {
    fn confidence(&self) -> f64 {
        self.candidate.as_ref().map_or(0.0, |c| c.confidence)
    }

    fn offer(&mut self, candidate: ScoredCandidate, method: Method) {
        if candidate.improves_on(self.candidate.as_ref()) {
            tracing::debug!(
                key = %candidate.key,
                confidence = candidate.confidence,
                method = %method,
                "new best candidate"
            );
            self.candidate = Some(candidate);
            self.method = Some(method);
        }
    }

    fn into_outcome(self) -> CrackOutcome {
        match (self.candidate, self.method) {
            (Some(candidate), Some(method)) => CrackOutcome::Cracked { candidate, method },
            _ => CrackOutcome::NotFound,
        }
    }
}

/// Vigenère cracker holding its configuration and word list.
///
/// # Examples
///
/// ```
/// use vigenere_crack::cipher::encrypt;
/// use vigenere_crack::{Cracker, Method};
///
/// let ciphertext = encrypt("the secret message is hidden in plain text", "CODE").unwrap();
/// let outcome = Cracker::new().crack(&ciphertext);
/// assert_eq!(outcome.key(), Some("CODE"));
/// assert_eq!(outcome.method(), Method::KnownKeyPattern);
/// ```
#[derive(Debug, Clone)]
pub struct Cracker {
    config: CrackerConfig,
    lexicon: Lexicon,
}

impl Default for Cracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Cracker {
    /// Creates a cracker with the default configuration and the embedded
    /// English word list.
    pub fn new() -> Self {
        Cracker {
            config: CrackerConfig::default(),
            lexicon: Lexicon::english(),
        }
    }

    /// Creates a cracker from a custom configuration and word list.
    ///
    /// # Errors
    /// Returns [`CrackError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(config: CrackerConfig, lexicon: Lexicon) -> Result<Self, CrackError> {
        config.validate()?;
        Ok(Cracker { config, lexicon })
    }

    /// The active configuration.
    pub fn config(&self) -> &CrackerConfig {
        &self.config
    }

    /// The word list used for scoring.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Runs every strategy against `ciphertext` and returns the best result.
    pub fn crack(&self, ciphertext: &str) -> CrackOutcome {
        let oracle = Oracle::new(ciphertext, &self.lexicon);
        let mut best = Best::default();

        tracing::info!(len = oracle.ciphertext().len(), "trying known key patterns");
        if let Some(known) = self.try_known_keys(&oracle) {
            best.offer(known, Method::KnownKeyPattern);
        }
        if best.confidence() > self.config.known_key_threshold {
            let outcome = best.into_outcome();
            tracing::info!(
                key = ?outcome.key(),
                confidence = outcome.confidence(),
                "cracked with a known key"
            );
            return outcome;
        }

        let lengths = self.candidate_key_lengths(oracle.ciphertext());
        tracing::info!(?lengths, "trying key lengths");

        for &length in &lengths {
            if let Some(candidate) = self.frequency_analysis(&oracle, length) {
                best.offer(candidate, Method::FrequencyAnalysis);
            }
        }

        if best.confidence() < self.config.brute_force_trigger {
            tracing::info!(
                confidence = best.confidence(),
                "frequency analysis inconclusive, falling back to brute force"
            );
            for &length in lengths
                .iter()
                .filter(|&&l| l <= self.config.brute_force_length_cutoff)
            {
                let Some(report) = brute_force_key(&oracle, length, &self.config) else {
                    continue;
                };
                if let Some(candidate) = report.best {
                    best.offer(candidate, Method::BruteForce);
                }
            }
        }

        let outcome = best.into_outcome();
        tracing::info!(
            key = ?outcome.key(),
            confidence = outcome.confidence(),
            method = %outcome.method(),
            "cracking finished"
        );
        outcome
    }

    /// Scores every common key and returns the best positive-confidence one.
    pub fn try_known_keys(&self, oracle: &Oracle<'_>) -> Option<ScoredCandidate> {
        let mut best: Option<ScoredCandidate> = None;
        for key in &self.config.common_keys {
            let candidate = oracle.score(key);
            tracing::debug!(key = %key, confidence = candidate.confidence, "known key scored");
            if candidate.improves_on(best.as_ref()) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Key lengths to try, Kasiski estimates first, then the defaults, no
    /// duplicates.
    pub fn candidate_key_lengths(&self, ciphertext: &str) -> Vec<usize> {
        let ciphertext = normalize(ciphertext);
        let repeats = find_repeated_sequences(&ciphertext, self.config.sequence_length);
        if repeats.is_empty() {
            return merge_key_lengths(&[], &self.config.default_key_lengths);
        }
        let estimated = estimate_key_lengths(
            &repeats,
            self.config.kasiski_candidates,
            &self.config.default_key_lengths,
        );
        tracing::debug!(?estimated, repeats = repeats.len(), "kasiski examination");
        merge_key_lengths(&estimated, &self.config.default_key_lengths)
    }

    /// Recovers a key of `key_length` by per-column frequency analysis and
    /// scores it. `None` only for a zero key length.
    pub fn frequency_analysis(
        &self,
        oracle: &Oracle<'_>,
        key_length: usize,
    ) -> Option<ScoredCandidate> {
        let split = match split_into_columns(
            oracle.ciphertext(),
            key_length,
            self.config.column_alignment,
        ) {
            Ok(split) => split,
            Err(err) => {
                tracing::warn!(key_length, error = %err, "skipping key length");
                return None;
            }
        };
        let key = determine_key(&split, &self.config.frequency_weights);
        let candidate = oracle.score(&key);
        tracing::debug!(
            key_length,
            key = %candidate.key,
            confidence = candidate.confidence,
            "frequency analysis"
        );
        Some(candidate)
    }
}

/// Cracks `ciphertext` with the default [`Cracker`].
pub fn crack(ciphertext: &str) -> CrackOutcome {
    Cracker::new().crack(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encrypt;

    const SAMPLE: &str = "I love to study cryptography as I want to become crypto and AI engineer";

    #[test]
    fn test_method_names() {
        assert_eq!(Method::KnownKeyPattern.as_str(), "known key pattern");
        assert_eq!(Method::FrequencyAnalysis.to_string(), "frequency analysis");
        assert_eq!(Method::BruteForce.to_string(), "brute force");
        assert_eq!(Method::None.to_string(), "none");
    }

    #[test]
    fn test_known_key_short_circuits() {
        let ciphertext = encrypt(SAMPLE, "CRYPTO").unwrap();
        let outcome = Cracker::new().crack(&ciphertext);
        assert_eq!(outcome.key(), Some("CRYPTO"));
        assert_eq!(outcome.method(), Method::KnownKeyPattern);
        assert!(outcome.confidence() > 0.5);
        assert_eq!(outcome.plaintext(), Some(normalize(SAMPLE).as_str()));
    }

    #[test]
    fn test_not_found_record() {
        let outcome = CrackOutcome::NotFound;
        assert!(!outcome.is_cracked());
        let record = outcome.to_record();
        assert_eq!(record.key, None);
        assert_eq!(record.plaintext, None);
        assert_eq!(record.confidence, 0.0);
        assert_eq!(record.method, Method::None);
    }

    #[test]
    fn test_outcome_serializes() {
        let ciphertext = encrypt(SAMPLE, "CRYPTO").unwrap();
        let json = serde_json::to_value(Cracker::new().crack(&ciphertext)).unwrap();
        assert_eq!(json["Cracked"]["candidate"]["key"], "CRYPTO");
        assert_eq!(json["Cracked"]["method"], "known key pattern");

        let json = serde_json::to_value(CrackOutcome::NotFound).unwrap();
        assert_eq!(json, "NotFound");
    }

    #[test]
    fn test_empty_ciphertext_is_not_found() {
        assert_eq!(Cracker::new().crack(""), CrackOutcome::NotFound);
    }

    #[test]
    fn test_empty_lexicon_never_cracks() {
        let cracker = Cracker::with_config(CrackerConfig::default(), Lexicon::default()).unwrap();
        let ciphertext = encrypt(SAMPLE, "CRYPTO").unwrap();
        assert_eq!(cracker.crack(&ciphertext), CrackOutcome::NotFound);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CrackerConfig::default().with_search_budget(0);
        assert!(Cracker::with_config(config, Lexicon::english()).is_err());
    }

    #[test]
    fn test_candidate_key_lengths_without_repeats() {
        let lengths = Cracker::new().candidate_key_lengths("ABCDEFG");
        assert_eq!(lengths, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_candidate_key_lengths_puts_kasiski_first() {
        let lengths = Cracker::new().candidate_key_lengths("KQZABCKQZDEFGHIJLMKQZ");
        assert_eq!(lengths, vec![6, 3, 4, 5, 7]);
    }

    #[test]
    fn test_frequency_analysis_zero_length() {
        let cracker = Cracker::new();
        let oracle = Oracle::new("ABC", cracker.lexicon());
        assert!(cracker.frequency_analysis(&oracle, 0).is_none());
    }

    #[test]
    fn test_raised_known_key_threshold_forces_analysis() {
        let config = CrackerConfig::default().with_known_key_threshold(1.0);
        let cracker = Cracker::with_config(config, Lexicon::english()).unwrap();
        let ciphertext = encrypt(SAMPLE, "CRYPTO").unwrap();
        let outcome = cracker.crack(&ciphertext);
        // later strategies cannot beat the known key on this short text
        assert_eq!(outcome.key(), Some("CRYPTO"));
        assert_eq!(outcome.method(), Method::KnownKeyPattern);
    }
}
