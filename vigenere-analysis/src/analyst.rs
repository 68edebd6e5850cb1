//! Entry points tying key-length discovery to decryption

use tracing::info;

use crate::coincidence::CoincidenceSearch;
use crate::config::AnalysisConfig;
use crate::decrypt::{self, Decryption};
use crate::error::Result;
use crate::estimator::KeyLengthEstimator;
use crate::kasiski::Kasiski;
use crate::language::LanguageRegistry;
use crate::text::Ciphertext;

/// Cracks Vigenère ciphertexts against a registry of language profiles.
///
/// Holds no state between calls: every method normalizes its input, finds a
/// key length and decrypts in one go.
#[derive(Debug, Clone)]
pub struct Cryptanalyst<'a> {
    registry: &'a LanguageRegistry,
    config: AnalysisConfig,
}

impl<'a> Cryptanalyst<'a> {
    pub fn new(registry: &'a LanguageRegistry) -> Self {
        Self {
            registry,
            config: AnalysisConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn registry(&self) -> &LanguageRegistry {
        self.registry
    }

    /// Cracks `text` using Kasiski examination to find the key length.
    ///
    /// `language` may be any of the registered languages.
    pub fn kasiski(&self, text: &str, language: &str) -> Result<Decryption> {
        self.config.validate()?;
        let profile = self.registry.get(language)?;
        let ciphertext = Ciphertext::new(text)?;

        let estimator = Kasiski {
            min_repeat_len: self.config.min_repeat_len,
        };
        let key_size = estimator.estimate(&ciphertext)?;
        info!(key_size, method = estimator.name(), "key length found");

        decrypt::decrypt(&ciphertext, key_size, profile)
    }

    /// Cracks `text` using the index of coincidence to find the key length.
    ///
    /// Only languages with an IC target qualify.
    pub fn coincidence(&self, text: &str, language: &str) -> Result<Decryption> {
        self.config.validate()?;
        let (profile, target) = self.registry.get_with_coincidence(language)?;
        let ciphertext = Ciphertext::new(text)?;

        let estimator = CoincidenceSearch::new(target).with_tolerance(self.config.ic_tolerance);
        let key_size = estimator.estimate(&ciphertext)?;
        info!(key_size, method = estimator.name(), "key length found");

        decrypt::decrypt(&ciphertext, key_size, profile)
    }

    /// Cracks `text` with a caller-supplied key-length estimator.
    pub fn crack_with<E: KeyLengthEstimator + ?Sized>(
        &self,
        estimator: &E,
        text: &str,
        language: &str,
    ) -> Result<Decryption> {
        let profile = self.registry.get(language)?;
        let ciphertext = Ciphertext::new(text)?;

        let key_size = estimator.estimate(&ciphertext)?;
        info!(key_size, method = estimator.name(), "key length found");

        decrypt::decrypt(&ciphertext, key_size, profile)
    }

    /// Decrypts `text` for an already known key length.
    pub fn decrypt(&self, text: &str, key_size: usize, language: &str) -> Result<Decryption> {
        let profile = self.registry.get(language)?;
        let ciphertext = Ciphertext::new(text)?;
        decrypt::decrypt(&ciphertext, key_size, profile)
    }
}
