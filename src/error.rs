//! Error types for the vigenere-crack library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the vigenere-crack library.
///
/// The cracking pipeline itself never surfaces these: malformed candidate
/// keys are scored as confidence 0 and oversized brute-force lengths are
/// skipped. They reach the caller only from the cipher primitives, the
/// lexicon loader and configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrackError {
    /// Key has no symbols.
    #[error("Key must be at least 1 character long")]
    EmptyKey,
    /// Key contains a symbol outside the 27-symbol alphabet.
    #[error("Key symbol {0:?} is not part of the alphabet")]
    InvalidKeySymbol(char),
    /// Key length of zero requested where at least one column is required.
    #[error("Key length must be at least 1, got {0}")]
    InvalidKeyLength(usize),
    /// Shift is outside `[0, 27)`.
    #[error("Shift {0} is outside the valid range [0, 27)")]
    ShiftOutOfRange(usize),
    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Word list could not be read.
    #[error("Failed to read word list {path:?}: {message}")]
    LexiconIo {
        /// Path of the word list.
        path: PathBuf,
        /// Underlying I/O error, rendered.
        message: String,
    },
}
