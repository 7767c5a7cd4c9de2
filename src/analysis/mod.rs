//! Cryptanalysis stages used by the [`Cracker`](crate::Cracker).
//!
//! ```text
//! kasiski      (repeated sequences -> ranked key lengths)
//! columns      (key length -> per-column shifts -> candidate key)
//! brute_force  (key length -> budgeted enumeration of candidate keys)
//!     \________________ scored by ________________/
//!                        oracle
//! ```

pub mod brute_force;
pub mod columns;
pub mod kasiski;
pub mod oracle;
