//! # Vigenère Analysis Library
//!
//! This library recovers Vigenère-encrypted plaintext without the key, using
//! only the letter statistics of the plaintext's language.
//!
//! ## Methods
//!
//! - **Kasiski examination** - GCD voting over distances between repeated polygrams
//! - **Index of coincidence** - smallest key length whose columns look like plaintext
//!
//! Once a key length is known, each column's Caesar shift is recovered by
//! frequency matching and undone.
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{Cryptanalyst, LanguageRegistry, samples};
//!
//! let registry = LanguageRegistry::builtin();
//! let analyst = Cryptanalyst::new(&registry);
//!
//! let result = analyst.kasiski(samples::KASISKI_EXERCISE, "french")?;
//! assert_eq!(result.key_size, 4);
//! assert!(result.plaintext.starts_with("aneufheures"));
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```
//!
//! ## Supported languages
//!
//! Frequency tables: English, French, German, Spanish, Portuguese, Esperanto,
//! Italian, Turkish, Swedish, Polish, Dutch, Danish, Icelandic, Finnish, Czech.
//! IC targets: French, English, German, Spanish, Italian.

// Public modules
pub mod analyst;
pub mod caesar;
pub mod coincidence;
pub mod columns;
pub mod config;
pub mod decrypt;
pub mod error;
pub mod estimator;
pub mod kasiski;
pub mod language;
pub mod offset;
pub mod samples;
pub mod tables;
pub mod text;

// Re-exports for easy access
pub use analyst::Cryptanalyst;
pub use coincidence::CoincidenceSearch;
pub use config::AnalysisConfig;
pub use decrypt::Decryption;
pub use error::{AnalysisError, Result};
pub use estimator::KeyLengthEstimator;
pub use kasiski::Kasiski;
pub use language::{LanguageProfile, LanguageRegistry};
pub use text::Ciphertext;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
