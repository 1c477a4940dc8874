//! Error types for the cipher operations.

use thiserror::Error;

use crate::cipher::{KEY_MAX, KEY_MIN};

/// Errors returned by [`encrypt`](crate::encrypt) and [`decrypt`](crate::decrypt).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key lies outside `KEY_MIN..=KEY_MAX`.
    #[error("key must be between {min} and {max}, got {key}", min = KEY_MIN, max = KEY_MAX)]
    InvalidKey { key: i64 },
}
