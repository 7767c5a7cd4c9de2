//! The fixed 27-symbol alphabet shared by every component.
//!
//! Symbol order is space followed by `A` through `Z`; a symbol's position
//! in [`ALPHABET`] is its index for all shift arithmetic (mod 27).

/// Ordered symbol table: space + 26 uppercase letters.
pub const ALPHABET: &str = " ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 27;

/// The 26 letters, without the space symbol.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in [`LETTERS`].
pub const LETTER_COUNT: usize = 26;

const SYMBOLS: &[u8; ALPHABET_LEN] = b" ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the alphabet index of `c`, or `None` if `c` is not a symbol.
///
/// Only uppercase letters and the ASCII space are symbols; callers that
/// accept mixed case should [`normalize`] first.
#[inline]
pub fn index_of(c: char) -> Option<usize> {
    match c {
        ' ' => Some(0),
        'A'..='Z' => Some(c as usize - 'A' as usize + 1),
        _ => None,
    }
}

/// Returns the symbol at `index mod 27`.
#[inline]
pub fn symbol_at(index: usize) -> char {
    SYMBOLS[index % ALPHABET_LEN] as char
}

/// Returns `true` for `A`..=`Z`.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Returns the position of `c` within [`LETTERS`] (`A` = 0).
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    is_letter(c).then(|| c as usize - 'A' as usize)
}

/// Shifts a symbol index backwards by `shift`, wrapping mod 27.
#[inline]
pub(crate) fn unshift(index: usize, shift: usize) -> usize {
    (index + ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN
}

/// Uppercases `text` and discards everything that is not a symbol.
///
/// # Examples
///
/// ```
/// use vigenere_crack::alphabet::normalize;
///
/// assert_eq!(normalize("Hello, World! 42"), "HELLO WORLD ");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(|&c| index_of(c).is_some())
        .collect()
}
