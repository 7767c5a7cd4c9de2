//! Cryptanalysis of a classical Vigenère cipher over a 27-symbol alphabet.
//!
//! The alphabet is the space followed by `A`–`Z`; keys cycle over every
//! symbol, spaces included. The [`Cracker`] recovers a key without knowing
//! it, combining several heuristics and reporting how confident it is.
//!
//! # Architecture
//!
//! ```text
//! alphabet ── cipher ── caesar
//!                │
//!             lexicon
//!                │
//! analysis::oracle      (decrypt + score against the word list)
//!     ├── analysis::kasiski      (repeated sequences -> key lengths)
//!     ├── analysis::columns      (key length -> per-column shifts)
//!     └── analysis::brute_force  (budgeted key enumeration)
//!                │
//! Cracker (known keys -> Kasiski + frequency analysis -> brute force)
//! ```
//!
//! The cipher has no cryptographic strength; this crate exists to study
//! why.
//!
//! # Examples
//!
//! Crack a message encrypted with a common key:
//!
//! ```
//! use vigenere_crack::cipher::encrypt;
//! use vigenere_crack::{crack, Method};
//!
//! let ciphertext = encrypt(
//!     "I love to study cryptography as I want to become crypto and AI engineer",
//!     "CRYPTO",
//! )
//! .unwrap();
//!
//! let outcome = crack(&ciphertext);
//! assert_eq!(outcome.key(), Some("CRYPTO"));
//! assert_eq!(outcome.method(), Method::KnownKeyPattern);
//! assert!(outcome.confidence() > 0.5);
//! ```
//!
//! Tune the attack with a custom configuration:
//!
//! ```
//! use vigenere_crack::{Cracker, CrackerConfig, Lexicon};
//!
//! let config = CrackerConfig::default()
//!     .with_common_keys(["LEMON"])
//!     .with_search_budget(500);
//! let cracker = Cracker::with_config(config, Lexicon::english()).unwrap();
//! assert_eq!(cracker.config().search_budget, 500);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod analysis;
pub mod caesar;
pub mod cipher;
pub mod config;
pub mod error;
pub mod lexicon;

mod cracker;

pub use analysis::oracle::ScoredCandidate;
pub use config::{ColumnAlignment, CrackerConfig};
pub use cracker::{crack, CrackOutcome, CrackRecord, Cracker, Method};
pub use error::CrackError;
pub use lexicon::Lexicon;
