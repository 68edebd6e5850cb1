//! Generic key-length estimator trait

use crate::error::Result;
use crate::text::Ciphertext;

/// Trait for a strategy that guesses the length of a repeating key
pub trait KeyLengthEstimator {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Returns a candidate key length in `1..=ciphertext.len()`
    fn estimate(&self, ciphertext: &Ciphertext) -> Result<usize>;
}
