/// Key-checked encryption and decryption on top of the shift transform
use crate::error::CipherError;
use crate::shift::shift_text;

/// Smallest key accepted by [`encrypt`] and [`decrypt`]
pub const KEY_MIN: i64 = 1;

/// Largest key accepted by [`encrypt`] and [`decrypt`]
pub const KEY_MAX: i64 = 25;

/// Rejects keys that are out of range. 0 and 26 are no-ops and count as invalid.
pub fn validate_key(key: i64) -> Result<i64, CipherError> {
    if (KEY_MIN..=KEY_MAX).contains(&key) {
        Ok(key)
    } else {
        Err(CipherError::InvalidKey { key })
    }
}

/// Encrypt plaintext by shifting every letter forward by `key`
pub fn encrypt(plaintext: &str, key: i64) -> Result<String, CipherError> {
    let key = validate_key(key)?;
    Ok(shift_text(plaintext, key))
}

/// Decrypt ciphertext produced by [`encrypt`] with the same `key`
pub fn decrypt(ciphertext: &str, key: i64) -> Result<String, CipherError> {
    let key = validate_key(key)?;
    Ok(shift_text(ciphertext, -key))
}
