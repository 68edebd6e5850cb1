//! Caesar rotation and keyed Vigenère encryption

use crate::error::{AnalysisError, Result};

/// Shift a single lowercase letter forward by `n` positions, wrapping at `z`.
///
/// Bytes outside `a..=z` are returned unchanged.
pub fn rotate_letter(letter: u8, n: i64) -> u8 {
    if !letter.is_ascii_lowercase() {
        return letter;
    }

    let shift = n.rem_euclid(26) as u8;
    (letter - b'a' + shift) % 26 + b'a'
}

/// Rotate every letter of `text` forward by `n` positions.
///
/// `n` may be any integer: it is reduced modulo 26, so `rotate(t, -3)`
/// and `rotate(t, 23)` agree.
pub fn rotate(text: &str, n: i64) -> String {
    text.bytes().map(|b| rotate_letter(b, n) as char).collect()
}

/// Converts a key string into its per-position shifts (`a = 0 .. z = 25`).
pub fn key_offsets(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(AnalysisError::InvalidInput("key is empty".to_string()));
    }

    key.bytes()
        .map(|b| {
            if b.is_ascii_alphabetic() {
                Ok(b.to_ascii_lowercase() - b'a')
            } else {
                Err(AnalysisError::InvalidInput(format!(
                    "key character {:?} is not a letter",
                    b as char
                )))
            }
        })
        .collect()
}

/// Encrypts lowercase `plaintext` with a repeating `key`.
///
/// Position `i` is shifted by key letter `i mod key.len()`.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let offsets = key_offsets(key)?;
    Ok(apply_key(plaintext, &offsets, 1))
}

/// Decrypts lowercase `ciphertext` with a known repeating `key`.
pub fn decrypt_with_key(ciphertext: &str, key: &str) -> Result<String> {
    let offsets = key_offsets(key)?;
    Ok(apply_key(ciphertext, &offsets, -1))
}

fn apply_key(text: &str, offsets: &[u8], direction: i64) -> String {
    text.bytes()
        .zip(offsets.iter().cycle())
        .map(|(b, &k)| rotate_letter(b, direction * k as i64) as char)
        .collect()
}
