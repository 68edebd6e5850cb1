//! Index of coincidence key-length search
//!
//! The index of coincidence is the probability of drawing two identical
//! letters from a text. Plaintext in a given language has a characteristic
//! value, while evenly mixed letters sit near 0.038. Splitting a Vigenère
//! ciphertext on the right key length yields columns that each behave like a
//! single Caesar-shifted alphabet, bringing their mean IC back up to the
//! language's value.

use tracing::debug;

use crate::columns;
use crate::error::{AnalysisError, Result};
use crate::estimator::KeyLengthEstimator;
use crate::text::{letter_counts, Ciphertext};

/// Default slack below the language's expected IC.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Calculates the index of coincidence of `text`.
///
/// `Σ nᵢ(nᵢ−1) / (N(N−1))` over the letters `a..=z`. Returns 0.0 when fewer
/// than two letters are present, since no pair can be drawn.
pub fn index_of_coincidence(text: &str) -> f64 {
    let counts = letter_counts(text.as_bytes());
    let total: usize = counts.iter().sum();

    if total < 2 {
        return 0.0;
    }

    let numerator: usize = counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
    numerator as f64 / (total * (total - 1)) as f64
}

/// Mean IC of the `key_size` columns of `text`.
pub fn mean_column_coincidence(text: &str, key_size: usize) -> Result<f64> {
    let columns = columns::split(text, key_size)?;
    let total: f64 = columns.iter().map(|c| index_of_coincidence(c)).sum();
    Ok(total / columns.len() as f64)
}

/// Returns the first key length whose mean column IC reaches `target - tolerance`.
///
/// Candidates are tried from 1 upward. Running past the text length means the
/// tolerance is too strict for this text.
pub fn find_key_length(text: &str, target: f64, tolerance: f64) -> Result<usize> {
    let threshold = target - tolerance;

    for key_size in 1..=text.len() {
        let ic = mean_column_coincidence(text, key_size)?;
        debug!(key_size, ic, threshold, "coincidence candidate");

        if ic >= threshold {
            return Ok(key_size);
        }
    }

    Err(AnalysisError::ToleranceExhausted {
        tolerance,
        text_len: text.len(),
    })
}

/// Key-length estimator backed by the index of coincidence.
#[derive(Debug, Clone, Copy)]
pub struct CoincidenceSearch {
    /// Expected IC of plaintext in the target language
    pub target: f64,
    pub tolerance: f64,
}

impl CoincidenceSearch {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl KeyLengthEstimator for CoincidenceSearch {
    fn name(&self) -> &'static str {
        "index-of-coincidence"
    }

    fn estimate(&self, ciphertext: &Ciphertext) -> Result<usize> {
        find_key_length(ciphertext.as_str(), self.target, self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caesar::encrypt;

    #[test]
    fn test_single_letter_is_maximal() {
        assert_eq!(index_of_coincidence("aaaa"), 1.0);
    }

    #[test]
    fn test_uniform_text_is_low() {
        // Every letter exactly once: no two draws can match
        assert_eq!(index_of_coincidence("abcdefghijklmnopqrstuvwxyz"), 0.0);

        // Many copies of the alphabet approach 1/26
        let text = "abcdefghijklmnopqrstuvwxyz".repeat(40);
        let ic = index_of_coincidence(&text);
        assert!(ic > 0.037 && ic < 0.039, "ic = {ic}");
    }

    #[test]
    fn test_short_text() {
        assert_eq!(index_of_coincidence(""), 0.0);
        assert_eq!(index_of_coincidence("q"), 0.0);
    }

    #[test]
    fn test_mean_column_coincidence() {
        // Columns "aaa" and "bbb" are each single-letter
        assert_eq!(mean_column_coincidence("ababab", 2).unwrap(), 1.0);
        assert!(mean_column_coincidence("ababab", 0).is_err());
    }

    #[test]
    fn test_find_key_length() {
        let plaintext = "itwasthebestoftimesitwastheworstoftimesitwastheageofwisdomitwastheageoffoolishness\
                         itwastheepochofbeliefitwastheepochofincredulityitwastheseasonoflightitwastheseasonofdarkness\
                         itwasthespringofhopeitwasthewinterofdespair";

        let ciphertext = encrypt(plaintext, "lemon").unwrap();
        assert_eq!(find_key_length(&ciphertext, 0.065, DEFAULT_TOLERANCE).unwrap(), 5);

        let ciphertext = encrypt(plaintext, "key").unwrap();
        assert_eq!(find_key_length(&ciphertext, 0.065, DEFAULT_TOLERANCE).unwrap(), 3);
    }

    #[test]
    fn test_plaintext_converges_at_one() {
        assert_eq!(find_key_length("aaaa", 0.065, DEFAULT_TOLERANCE).unwrap(), 1);
    }

    #[test]
    fn test_tolerance_exhausted() {
        assert!(matches!(
            find_key_length("xq", 0.074, DEFAULT_TOLERANCE),
            Err(AnalysisError::ToleranceExhausted { text_len: 2, .. })
        ));
    }
}
