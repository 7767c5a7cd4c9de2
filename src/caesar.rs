//! Single-shift (Caesar) tools over the same 27-symbol alphabet.
//!
//! A Caesar shift is a Vigenère key of length one, so these helpers reuse
//! the cipher arithmetic and add the two classic attacks: trying every
//! shift against a word list, and assuming the most frequent letter is `E`.

use crate::alphabet::{self, normalize, ALPHABET_LEN, LETTERS, LETTER_COUNT};
use crate::cipher::{decrypt_with_shifts, encrypt_with_shifts};
use crate::error::CrackError;
use crate::lexicon::Lexicon;

fn check_shift(shift: usize) -> Result<(), CrackError> {
    if shift >= ALPHABET_LEN {
        return Err(CrackError::ShiftOutOfRange(shift));
    }
    Ok(())
}

/// Shifts every symbol of `plaintext` forward by `shift`.
///
/// # Errors
/// Returns [`CrackError::ShiftOutOfRange`] if `shift >= 27`.
pub fn encrypt(plaintext: &str, shift: usize) -> Result<String, CrackError> {
    check_shift(shift)?;
    Ok(encrypt_with_shifts(&normalize(plaintext), &[shift]))
}

/// Shifts every symbol of `ciphertext` back by `shift`.
///
/// # Errors
/// Returns [`CrackError::ShiftOutOfRange`] if `shift >= 27`.
pub fn decrypt(ciphertext: &str, shift: usize) -> Result<String, CrackError> {
    check_shift(shift)?;
    Ok(decrypt_with_shifts(&normalize(ciphertext), &[shift]))
}

/// Every candidate decryption, indexed by shift.
pub fn all_shifts(ciphertext: &str) -> Vec<(usize, String)> {
    let ciphertext = normalize(ciphertext);
    (0..ALPHABET_LEN)
        .map(|shift| (shift, decrypt_with_shifts(&ciphertext, &[shift])))
        .collect()
}

/// Returns the first shift whose decryption `lexicon` accepts as English.
pub fn crack_with_lexicon(ciphertext: &str, lexicon: &Lexicon) -> Option<(usize, String)> {
    let found = all_shifts(ciphertext)
        .into_iter()
        .find(|(_, plaintext)| lexicon.is_english(plaintext));
    match &found {
        Some((shift, _)) => tracing::info!(shift, "caesar shift recovered"),
        None => tracing::info!("no caesar shift produced english text"),
    }
    found
}

/// Occurrences of each letter `A`..=`Z` in `text`, case-insensitive.
pub fn letter_frequencies(text: &str) -> [usize; LETTER_COUNT] {
    let mut counts = [0usize; LETTER_COUNT];
    for i in normalize(text).chars().filter_map(alphabet::letter_index) {
        counts[i] += 1;
    }
    counts
}

/// Guesses the shift by mapping the most frequent ciphertext letter onto
/// `E`. Ties go to the earliest letter; `None` if there are no letters.
pub fn crack_by_frequency(ciphertext: &str) -> Option<usize> {
    let counts = letter_frequencies(ciphertext);
    let (most_frequent, &count) = counts
        .iter()
        .enumerate()
        .rev()
        .max_by_key(|&(_, count)| count)?;
    if count == 0 {
        return None;
    }
    let observed = alphabet::index_of(LETTERS.as_bytes()[most_frequent] as char)?;
    let expected = alphabet::index_of('E')?;
    Some((observed + ALPHABET_LEN - expected) % ALPHABET_LEN)
}
