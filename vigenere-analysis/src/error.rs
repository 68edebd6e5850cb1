//! Error types for cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Language not recognized: {0}")]
    UnsupportedLanguage(String),

    #[error("Unable to determine key length (no repeated distance shares a divisor > 1)")]
    KeyLengthUndetermined,

    #[error(
        "Key size cannot be computed for a {text_len}-letter text with tolerance {tolerance}. \
         Try to increase the tolerance"
    )]
    ToleranceExhausted { tolerance: f64, text_len: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
