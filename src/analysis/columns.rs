//! Column splitting and per-column frequency analysis.
//!
//! With the right key length every column was shifted by a single key
//! symbol, so each column is solved as an independent Caesar shift: the
//! shift whose decryption weighs most heavily on common English letters
//! wins. Columns are solved greedily and independently of each other.

use crate::alphabet::{self, symbol_at, unshift, ALPHABET_LEN, LETTER_COUNT};
use crate::config::ColumnAlignment;
use crate::error::CrackError;

/// Ciphertext letters distributed into `key_length` columns.
///
/// Spaces are never placed in a column. The column chosen for each letter
/// is remembered so [`rejoin`](Self::rejoin) can restore the letter-only
/// projection of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSplit {
    columns: Vec<String>,
    lanes: Vec<usize>,
}

impl ColumnSplit {
    /// The columns, in key order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    pub fn key_length(&self) -> usize {
        self.columns.len()
    }

    /// Reassembles the letters of the original text in their original order.
    pub fn rejoin(&self) -> String {
        let mut cursors: Vec<_> = self.columns.iter().map(|c| c.chars()).collect();
        self.lanes
            .iter()
            .filter_map(|&lane| cursors[lane].next())
            .collect()
    }
}

/// Splits the letters of `text` into `key_length` columns.
///
/// # Errors
/// Returns [`CrackError::InvalidKeyLength`] if `key_length` is 0.
pub fn split_into_columns(
    text: &str,
    key_length: usize,
    alignment: ColumnAlignment,
) -> Result<ColumnSplit, CrackError> {
    if key_length == 0 {
        return Err(CrackError::InvalidKeyLength(key_length));
    }
    let mut columns = vec![String::new(); key_length];
    let mut lanes = Vec::with_capacity(text.len());
    let mut letters_seen = 0usize;

    for (position, c) in text.chars().enumerate() {
        if !alphabet::is_letter(c) {
            continue;
        }
        let lane = match alignment {
            ColumnAlignment::CipherPosition => position % key_length,
            ColumnAlignment::LetterProjection => letters_seen % key_length,
        };
        columns[lane].push(c);
        lanes.push(lane);
        letters_seen += 1;
    }

    Ok(ColumnSplit { columns, lanes })
}

/// Relative frequency of each letter in `text`, spaces and other symbols
/// excluded. All zeros when `text` has no letters.
pub fn letter_distribution(text: &str) -> [f64; LETTER_COUNT] {
    let mut counts = [0usize; LETTER_COUNT];
    for i in text.chars().filter_map(alphabet::letter_index) {
        counts[i] += 1;
    }
    normalize_counts(&counts)
}

fn normalize_counts(counts: &[usize; LETTER_COUNT]) -> [f64; LETTER_COUNT] {
    let total: usize = counts.iter().sum();
    let mut distribution = [0.0; LETTER_COUNT];
    if total > 0 {
        for (d, &c) in distribution.iter_mut().zip(counts) {
            *d = c as f64 / total as f64;
        }
    }
    distribution
}

/// Returns the shift in `[0, 27)` whose decryption of `column` maximizes
/// the weighted frequency of `weights`' letters. Ties go to the smallest
/// shift; an empty column yields 0.
pub fn solve_column(column: &str, weights: &[(char, f64)]) -> usize {
    let mut weight_table = [0.0; LETTER_COUNT];
    for &(c, w) in weights {
        if let Some(i) = alphabet::letter_index(c) {
            weight_table[i] += w;
        }
    }
    let indices: Vec<usize> = column.chars().filter_map(alphabet::index_of).collect();

    let mut best_shift = 0;
    let mut best_score = 0.0;
    for shift in 0..ALPHABET_LEN {
        let mut counts = [0usize; LETTER_COUNT];
        for &index in &indices {
            if let Some(i) = alphabet::letter_index(symbol_at(unshift(index, shift))) {
                counts[i] += 1;
            }
        }
        let score: f64 = normalize_counts(&counts)
            .iter()
            .zip(&weight_table)
            .map(|(freq, weight)| freq * weight)
            .sum();
        if score > best_score {
            best_score = score;
            best_shift = shift;
        }
    }
    best_shift
}

/// Solves every column and concatenates the chosen key symbols.
pub fn determine_key(split: &ColumnSplit, weights: &[(char, f64)]) -> String {
    split
        .columns()
        .iter()
        .map(|column| symbol_at(solve_column(column, weights)))
        .collect()
}
