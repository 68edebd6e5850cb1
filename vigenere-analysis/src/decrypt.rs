//! Frequency-analysis decryption for a known key length

use tracing::debug;

use crate::caesar::rotate;
use crate::columns;
use crate::error::{AnalysisError, Result};
use crate::language::LanguageProfile;
use crate::offset::resolve_offset;
use crate::text::Ciphertext;

/// Outcome of a frequency-analysis decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decryption {
    /// Key length the ciphertext was split on
    pub key_size: usize,
    /// Encryption shift recovered for each column
    pub offsets: Vec<u8>,
    /// Reconstructed plaintext, same length as the ciphertext
    pub plaintext: String,
}

impl Decryption {
    /// The recovered key, one lowercase letter per column.
    pub fn key(&self) -> String {
        self.offsets.iter().map(|&k| (b'a' + k) as char).collect()
    }
}

/// Decrypts `ciphertext` assuming a repeating key of `key_size` letters.
///
/// Each column's shift is resolved independently against `language` and
/// undone, then the columns are interleaved back in order.
pub fn decrypt(
    ciphertext: &Ciphertext,
    key_size: usize,
    language: &LanguageProfile,
) -> Result<Decryption> {
    if key_size == 0 || key_size > ciphertext.len() {
        return Err(AnalysisError::InvalidInput(format!(
            "key size {} is outside 1..={}",
            key_size,
            ciphertext.len()
        )));
    }

    let ciphers = columns::split(ciphertext.as_str(), key_size)?;
    let mut offsets = Vec::with_capacity(key_size);
    let mut plains = Vec::with_capacity(key_size);

    for column in &ciphers {
        let offset = resolve_offset(column, language)?;
        plains.push(rotate(column, 26 - offset as i64));
        offsets.push(offset);
    }

    let plaintext = columns::recombine(&plains)?;

    debug!(key_size, ?offsets, language = language.name(), "columns decrypted");

    Ok(Decryption {
        key_size,
        offsets,
        plaintext,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caesar::encrypt;
    use crate::language::LanguageRegistry;

    const PLAINTEXT: &str = "itwasthebestoftimesitwastheworstoftimesitwastheageofwisdomitwastheageoffoolishness\
                             itwastheepochofbeliefitwastheepochofincredulityitwastheseasonoflightitwastheseasonofdarkness\
                             itwasthespringofhopeitwasthewinterofdespair";

    #[test]
    fn test_decrypt_known_key_size() {
        let registry = LanguageRegistry::builtin();
        let english = registry.get("english").unwrap();
        let ciphertext = Ciphertext::new(&encrypt(PLAINTEXT, "lemon").unwrap()).unwrap();

        let decryption = decrypt(&ciphertext, 5, english).unwrap();

        assert_eq!(decryption.key(), "lemon");
        assert_eq!(decryption.offsets, vec![11, 4, 12, 14, 13]);
        assert_eq!(decryption.plaintext, PLAINTEXT);
    }

    #[test]
    fn test_decrypt_uneven_columns_keeps_length() {
        let registry = LanguageRegistry::builtin();
        let english = registry.get("english").unwrap();
        // 217 letters split into 6 columns leaves a remainder of 1
        let ciphertext = Ciphertext::new(&encrypt(PLAINTEXT, "crypto").unwrap()).unwrap();

        let decryption = decrypt(&ciphertext, 6, english).unwrap();

        assert_eq!(decryption.plaintext.len(), ciphertext.len());
        assert_eq!(decryption.key(), "crypto");
        assert_eq!(decryption.plaintext, PLAINTEXT);
    }

    #[test]
    fn test_decrypt_invalid_key_size() {
        let registry = LanguageRegistry::builtin();
        let english = registry.get("english").unwrap();
        let ciphertext = Ciphertext::new("abcdef").unwrap();

        assert!(matches!(
            decrypt(&ciphertext, 0, english),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            decrypt(&ciphertext, 7, english),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_key_rendering() {
        let decryption = Decryption {
            key_size: 4,
            offsets: vec![0, 1, 2, 3],
            plaintext: String::new(),
        };
        assert_eq!(decryption.key(), "abcd");
    }
}
