//! Per-column shift recovery by frequency matching

use tracing::trace;

use crate::error::{AnalysisError, Result};
use crate::language::LanguageProfile;
use crate::text::letter_counts;

/// Finds the Caesar shift that was applied to `column`.
///
/// For every candidate `k` the column's observed letter percentages are
/// shifted back by `k` and compared to the language's expected percentages
/// by summed absolute difference. The lowest `k` with the smallest
/// difference wins. The returned value is the encryption shift, i.e. the
/// key letter `'a' + k`; rotating the column by `26 - k` decrypts it.
pub fn resolve_offset(column: &str, language: &LanguageProfile) -> Result<u8> {
    if column.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "cannot resolve the offset of an empty column".to_string(),
        ));
    }

    let counts = letter_counts(column.as_bytes());
    let total = column.len() as f64;
    let observed: Vec<f64> = counts.iter().map(|&n| 100.0 * n as f64 / total).collect();
    let expected = language.frequencies();

    let mut best_offset = 0u8;
    let mut best_distance = f64::INFINITY;

    for offset in 0..26 {
        let distance: f64 = (0..26)
            .map(|i| (observed[(i + offset) % 26] - expected[i]).abs())
            .sum();

        trace!(offset, distance, "offset candidate");

        if distance < best_distance {
            best_distance = distance;
            best_offset = offset as u8;
        }
    }

    Ok(best_offset)
}
