//! Budgeted brute-force key search.
//!
//! Keys of a fixed length are enumerated in odometer order (last position
//! varies fastest) over a per-position letter set, and each is scored by the
//! [`Oracle`]. Enumeration stops as soon as the budget is spent, so for most
//! lengths only a prefix of the key space is ever visited.

use crate::alphabet::LETTERS;
use crate::analysis::oracle::{Oracle, ScoredCandidate};
use crate::config::CrackerConfig;

/// Outcome of one brute-force run.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceReport {
    /// Key length searched.
    pub key_length: usize,
    /// Number of keys scored.
    pub evaluated: usize,
    /// Best positive-confidence candidate, if any.
    pub best: Option<ScoredCandidate>,
}

/// Search progress threaded through the enumeration.
#[derive(Debug)]
struct SearchState {
    remaining: usize,
    evaluated: usize,
    best: Option<ScoredCandidate>,
}

impl SearchState {
    fn new(budget: usize) -> Self {
        SearchState {
            remaining: budget,
            evaluated: 0,
            best: None,
        }
    }

    fn exhausted(&self) -> bool {
        self.remaining == 0
    }

    fn record(&mut self, candidate: ScoredCandidate) {
        self.remaining -= 1;
        self.evaluated += 1;
        if candidate.improves_on(self.best.as_ref()) {
            tracing::debug!(
                key = %candidate.key,
                confidence = candidate.confidence,
                "brute force found a better key"
            );
            self.best = Some(candidate);
        }
    }
}

/// Letters tried at each key position for `key_length`.
pub fn candidate_letters(key_length: usize, config: &CrackerConfig) -> &str {
    if key_length <= config.full_alphabet_max_length {
        LETTERS
    } else {
        &config.common_letters
    }
}

/// Brute-forces keys of exactly `key_length` letters.
///
/// Returns `None` when `key_length` is 0 or exceeds
/// `config.max_brute_force_length`; at most `config.search_budget` keys are
/// scored otherwise.
pub fn brute_force_key(
    oracle: &Oracle<'_>,
    key_length: usize,
    config: &CrackerConfig,
) -> Option<BruteForceReport> {
    if !(1..=config.max_brute_force_length).contains(&key_length) {
        tracing::debug!(
            key_length,
            max = config.max_brute_force_length,
            "key length outside brute-force range, skipping"
        );
        return None;
    }

    let letters: Vec<char> = candidate_letters(key_length, config).chars().collect();
    if letters.is_empty() {
        return Some(BruteForceReport {
            key_length,
            evaluated: 0,
            best: None,
        });
    }
    tracing::info!(key_length, budget = config.search_budget, "brute forcing key");

    let mut state = SearchState::new(config.search_budget);
    let mut digits = vec![0usize; key_length];

    while !state.exhausted() {
        let key: String = digits.iter().map(|&d| letters[d]).collect();
        state.record(oracle.score(&key));
        if !advance(&mut digits, letters.len()) {
            break;
        }
    }

    Some(BruteForceReport {
        key_length,
        evaluated: state.evaluated,
        best: state.best,
    })
}

/// Steps a mixed-radix counter; returns `false` once it wraps to all zeros.
fn advance(digits: &mut [usize], radix: usize) -> bool {
    for digit in digits.iter_mut().rev() {
        *digit += 1;
        if *digit < radix {
            return true;
        }
        *digit = 0;
    }
    false
}
