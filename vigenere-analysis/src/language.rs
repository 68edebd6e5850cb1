//! Language profiles and the registry that serves them
//!
//! A [`LanguageRegistry`] is built once by the caller and handed to the
//! analysis entry points. Nothing in this crate reads letter statistics from
//! global state, so tests can inject their own profiles.

use std::collections::BTreeMap;

use crate::error::{AnalysisError, Result};
use crate::tables::{COINCIDENCE_TARGETS, LETTER_FREQUENCIES};

/// Letter statistics of one natural language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    name: String,
    frequencies: [f64; 26],
    coincidence: Option<f64>,
}

impl LanguageProfile {
    /// Create a profile from per-letter percentages (`a` first).
    pub fn new(name: &str, frequencies: [f64; 26]) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            frequencies,
            coincidence: None,
        }
    }

    /// Attach the expected index of coincidence of plaintext in this language.
    pub fn with_coincidence(mut self, target: f64) -> Self {
        self.coincidence = Some(target);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expected percentage of each letter, indexed `a = 0 .. z = 25`.
    pub fn frequencies(&self) -> &[f64; 26] {
        &self.frequencies
    }

    /// Expected frequency of a single lowercase letter.
    pub fn frequency_of(&self, letter: u8) -> Option<f64> {
        letter
            .is_ascii_lowercase()
            .then(|| self.frequencies[(letter - b'a') as usize])
    }

    /// Expected index of coincidence, if one is known for this language.
    pub fn coincidence(&self) -> Option<f64> {
        self.coincidence
    }

    /// The letter this language uses most often.
    pub fn most_frequent_letter(&self) -> u8 {
        let index = self
            .frequencies
            .iter()
            .enumerate()
            .fold(0, |best, (i, &f)| if f > self.frequencies[best] { i } else { best });
        b'a' + index as u8
    }
}

/// Immutable set of language profiles, looked up by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    profiles: BTreeMap<String, LanguageProfile>,
}

impl LanguageRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fifteen built-in languages, five of them with IC targets.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        for (name, frequencies) in LETTER_FREQUENCIES {
            let mut profile = LanguageProfile::new(name, frequencies);
            if let Some((_, target)) = COINCIDENCE_TARGETS.iter().find(|(n, _)| *n == name) {
                profile = profile.with_coincidence(*target);
            }
            registry = registry.with_profile(profile);
        }

        registry
    }

    /// Add (or replace) a profile.
    pub fn with_profile(mut self, profile: LanguageProfile) -> Self {
        self.profiles.insert(profile.name.clone(), profile);
        self
    }

    /// Look up a language for frequency analysis.
    pub fn get(&self, language: &str) -> Result<&LanguageProfile> {
        self.profiles
            .get(&language.trim().to_ascii_lowercase())
            .ok_or_else(|| AnalysisError::UnsupportedLanguage(language.to_string()))
    }

    /// Look up a language that also carries an IC target.
    pub fn get_with_coincidence(&self, language: &str) -> Result<(&LanguageProfile, f64)> {
        let profile = self.get(language)?;
        profile
            .coincidence()
            .map(|target| (profile, target))
            .ok_or_else(|| AnalysisError::UnsupportedLanguage(language.to_string()))
    }

    /// Names of all registered languages, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Names of the languages usable with the IC method.
    pub fn coincidence_languages(&self) -> impl Iterator<Item = &str> {
        self.profiles
            .values()
            .filter(|p| p.coincidence.is_some())
            .map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
