//! core functionality for the Caesar cipher toolkit:
//! encrypting, decrypting and recovering unknown keys
//!
//! # Modules
//!
//! - `shift`: letter rotation used by every operation
//! - `cipher`: key-checked encrypt/decrypt
//! - `frequency`: English letter table and letter tallies
//! - `score`: chi-squared and ETAOIN plausibility scores
//! - `analyze`: brute-force key search and ranking
//! - `error`: error types

pub mod analyze;
pub mod cipher;
pub mod error;
pub mod frequency;
pub mod score;
pub mod shift;

// Re-export commonly used items
pub use analyze::{Analysis, Candidate, DEFAULT_TOP_N, KEY_SPACE, Listing, analyze};
pub use cipher::{KEY_MAX, KEY_MIN, decrypt, encrypt, validate_key};
pub use error::CipherError;
pub use frequency::{ENGLISH_FREQ, ETAOIN, LetterTally};
pub use score::{DEFAULT_ETAOIN_WEIGHT, Scorer, chi_squared_score, combined_score, etaoin_score};
pub use shift::shift_text;
