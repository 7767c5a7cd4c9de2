//! Kasiski examination.
//!
//! Repeated ciphertext sequences usually come from the same plaintext
//! fragment meeting the same key offset, so the distance between two
//! occurrences tends to be a multiple of the key length. The greatest common
//! divisors of those distances are ranked into key-length candidates.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::alphabet;

/// A sequence that occurs at least twice, with its start offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatedSequence {
    /// The repeated window.
    pub sequence: String,
    /// Start offsets in ascending order (at least two).
    pub positions: Vec<usize>,
}

impl RepeatedSequence {
    /// Distances between consecutive occurrences.
    pub fn spacings(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.windows(2).map(|pair| pair[1] - pair[0])
    }
}

/// Finds every window of `seq_length` symbols that occurs more than once.
///
/// Windows with fewer than two letters are ignored, which drops runs of
/// spaces. Results are ordered by first occurrence. A `seq_length` below 2
/// yields nothing since no window can then hold two letters.
pub fn find_repeated_sequences(text: &str, seq_length: usize) -> Vec<RepeatedSequence> {
    if seq_length < 2 {
        return Vec::new();
    }
    let symbols: Vec<char> = text.chars().collect();
    let mut index: HashMap<&[char], usize> = HashMap::new();
    let mut found: Vec<RepeatedSequence> = Vec::new();

    for (offset, window) in symbols.windows(seq_length).enumerate() {
        if window.iter().filter(|&&c| alphabet::is_letter(c)).count() < 2 {
            continue;
        }
        match index.get(window) {
            Some(&slot) => found[slot].positions.push(offset),
            None => {
                index.insert(window, found.len());
                found.push(RepeatedSequence {
                    sequence: window.iter().collect(),
                    positions: vec![offset],
                });
            }
        }
    }

    found.retain(|r| r.positions.len() > 1);
    found
}

/// Ranks likely key lengths from repeated-sequence spacings.
///
/// Every unordered pair of distinct spacing values contributes its GCD when
/// that GCD exceeds 1. GCDs are ranked by how many pairs produced them;
/// equal tallies keep the order in which the GCD was first produced. At most
/// `max_candidates` lengths are returned. When nothing qualifies, `fallback`
/// is returned unchanged.
pub fn estimate_key_lengths(
    repeats: &[RepeatedSequence],
    max_candidates: usize,
    fallback: &[usize],
) -> Vec<usize> {
    let mut spacings: Vec<usize> = Vec::new();
    for spacing in repeats.iter().flat_map(RepeatedSequence::spacings) {
        if !spacings.contains(&spacing) {
            spacings.push(spacing);
        }
    }

    // (gcd, tally) in first-produced order
    let mut tallies: Vec<(usize, usize)> = Vec::new();
    for &a in &spacings {
        for &b in &spacings {
            if a >= b {
                continue;
            }
            let divisor = gcd(a, b);
            if divisor <= 1 {
                continue;
            }
            match tallies.iter_mut().find(|(g, _)| *g == divisor) {
                Some((_, tally)) => *tally += 1,
                None => tallies.push((divisor, 1)),
            }
        }
    }

    if tallies.is_empty() {
        return fallback.to_vec();
    }
    // stable sort keeps first-produced order among equal tallies
    tallies.sort_by_key(|&(_, tally)| Reverse(tally));
    tallies
        .into_iter()
        .take(max_candidates)
        .map(|(length, _)| length)
        .collect()
}

/// Puts `prioritized` lengths first, followed by the remaining `defaults`,
/// without duplicates.
pub fn merge_key_lengths(prioritized: &[usize], defaults: &[usize]) -> Vec<usize> {
    let mut merged: Vec<usize> = Vec::with_capacity(prioritized.len() + defaults.len());
    for &length in prioritized.iter().chain(defaults) {
        if !merged.contains(&length) {
            merged.push(length);
        }
    }
    merged
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
