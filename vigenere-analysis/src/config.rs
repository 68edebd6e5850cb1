//! Tunable parameters of the analyses

use crate::coincidence::DEFAULT_TOLERANCE;
use crate::error::{AnalysisError, Result};
use crate::kasiski::DEFAULT_MIN_REPEAT_LEN;

/// Settings shared by the key-length finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// How far below the language's expected IC a mean column IC may fall
    pub ic_tolerance: f64,
    /// Shortest repeated polygram used by Kasiski examination
    pub min_repeat_len: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ic_tolerance: DEFAULT_TOLERANCE,
            min_repeat_len: DEFAULT_MIN_REPEAT_LEN,
        }
    }
}

impl AnalysisConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.ic_tolerance = tolerance;
        self
    }

    pub fn with_min_repeat_len(mut self, len: usize) -> Self {
        self.min_repeat_len = len;
        self
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if !self.ic_tolerance.is_finite() || self.ic_tolerance < 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "tolerance must be a non-negative number, got {}",
                self.ic_tolerance
            )));
        }

        if self.min_repeat_len < 2 {
            return Err(AnalysisError::InvalidInput(format!(
                "minimum repeat length must be at least 2, got {}",
                self.min_repeat_len
            )));
        }

        Ok(())
    }
}
