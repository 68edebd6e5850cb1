//! Ciphertext normalization and letter statistics

use std::fmt;

use crate::error::{AnalysisError, Result};

/// A non-empty run of lowercase letters `a..=z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(String);

impl Ciphertext {
    /// Normalize raw input: spaces are removed and ASCII case is folded.
    ///
    /// Anything else that is not a letter is rejected.
    pub fn new(raw: &str) -> Result<Self> {
        let text: String = raw
            .chars()
            .filter(|c| *c != ' ')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if text.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "ciphertext is empty".to_string(),
            ));
        }

        if let Some((i, c)) = text.char_indices().find(|(_, c)| !c.is_ascii_lowercase()) {
            return Err(AnalysisError::InvalidInput(format!(
                "unexpected character {c:?} at position {i}"
            )));
        }

        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ciphertext {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Counts the occurrences of each letter `a..=z`.
///
/// Bytes outside `a..=z` are ignored.
pub fn letter_counts(text: &[u8]) -> [usize; 26] {
    let mut counts = [0usize; 26];

    for &byte in text {
        if byte.is_ascii_lowercase() {
            counts[(byte - b'a') as usize] += 1;
        }
    }

    counts
}

/// The letter occurring most often, ties going to the earliest in the alphabet.
pub fn most_frequent_letter(text: &[u8]) -> Option<u8> {
    let counts = letter_counts(text);
    let (index, &count) = counts
        .iter()
        .enumerate()
        .fold((0, &0), |best, cur| if cur.1 > best.1 { cur } else { best });

    (count > 0).then_some(b'a' + index as u8)
}
