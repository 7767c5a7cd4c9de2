//! Vigenère cipher over the 27-symbol alphabet.
//!
//! Both directions uppercase their inputs and cycle the key symbol by symbol
//! against every character of the text, spaces included. Text symbols
//! outside the alphabet are discarded before encoding, so
//! `decrypt(encrypt(t, k), k) == normalize(t)` for every valid key.

use crate::alphabet::{self, normalize, symbol_at, unshift, ALPHABET_LEN};
use crate::error::CrackError;

/// Parses `key` into its per-position shifts.
///
/// # Errors
/// - [`CrackError::EmptyKey`] if `key` is empty.
/// - [`CrackError::InvalidKeySymbol`] for the first symbol outside the alphabet
///   after ASCII uppercasing.
pub fn key_shifts(key: &str) -> Result<Vec<usize>, CrackError> {
    if key.is_empty() {
        return Err(CrackError::EmptyKey);
    }
    key.chars()
        .map(|c| alphabet::index_of(c.to_ascii_uppercase()).ok_or(CrackError::InvalidKeySymbol(c)))
        .collect()
}

/// Encrypts `plaintext` with `key`.
///
/// # Errors
/// Returns the key validation errors of [`key_shifts`].
///
/// # Examples
///
/// ```
/// use vigenere_crack::cipher::{decrypt, encrypt};
///
/// let ciphertext = encrypt("attack at dawn", "lemon").unwrap();
/// assert_eq!(decrypt(&ciphertext, "LEMON").unwrap(), "ATTACK AT DAWN");
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CrackError> {
    let shifts = key_shifts(key)?;
    Ok(encrypt_with_shifts(&normalize(plaintext), &shifts))
}

/// Decrypts `ciphertext` with `key`.
///
/// # Errors
/// Returns the key validation errors of [`key_shifts`].
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CrackError> {
    let shifts = key_shifts(key)?;
    Ok(decrypt_with_shifts(&normalize(ciphertext), &shifts))
}

/// Encrypts already-normalized text with pre-parsed shifts.
pub(crate) fn encrypt_with_shifts(plaintext: &str, shifts: &[usize]) -> String {
    apply(plaintext, shifts, |index, shift| (index + shift) % ALPHABET_LEN)
}

/// Decrypts already-normalized text with pre-parsed shifts.
pub(crate) fn decrypt_with_shifts(ciphertext: &str, shifts: &[usize]) -> String {
    apply(ciphertext, shifts, unshift)
}

fn apply(text: &str, shifts: &[usize], op: impl Fn(usize, usize) -> usize) -> String {
    text.chars()
        .filter_map(alphabet::index_of)
        .zip(shifts.iter().cycle())
        .map(|(index, &shift)| symbol_at(op(index, shift)))
        .collect()
}
