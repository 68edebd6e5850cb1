//! Splitting ciphertext into key-aligned columns and interleaving them back

use crate::error::{AnalysisError, Result};

/// Split `text` into `key_size` columns.
///
/// Column `c` holds the letters at positions `c, c + key_size, c + 2*key_size, ...`
/// in their original order. When `text.len()` is not a multiple of `key_size`
/// the first `text.len() % key_size` columns are one letter longer.
pub fn split(text: &str, key_size: usize) -> Result<Vec<String>> {
    if key_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "key size must be at least 1".to_string(),
        ));
    }

    let mut columns = vec![String::with_capacity(text.len() / key_size + 1); key_size];

    for (i, c) in text.chars().enumerate() {
        columns[i % key_size].push(c);
    }

    Ok(columns)
}

/// Interleave columns back into a single string.
///
/// Output position `p` takes the next unused letter of column `p mod k`.
/// Every letter is emitted, trailing remainder included. Columns whose
/// lengths could not have come from [`split`] are rejected instead of
/// being truncated.
pub fn recombine<S: AsRef<str>>(columns: &[S]) -> Result<String> {
    if columns.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "no columns to recombine".to_string(),
        ));
    }

    let columns: Vec<&[u8]> = columns.iter().map(|c| c.as_ref().as_bytes()).collect();
    let longest = columns[0].len();

    for (index, pair) in columns.windows(2).enumerate() {
        let (previous, current) = (pair[0].len(), pair[1].len());
        if current > previous || longest - current > 1 {
            return Err(AnalysisError::InvalidInput(format!(
                "column {} has {} letters, which cannot follow a column of {} letters",
                index + 1,
                current,
                previous
            )));
        }
    }

    let total: usize = columns.iter().map(|c| c.len()).sum();
    let key_size = columns.len();

    let bytes: Vec<u8> = (0..total)
        .map(|p| columns[p % key_size][p / key_size])
        .collect();

    String::from_utf8(bytes)
        .map_err(|e| AnalysisError::InvalidInput(format!("columns are not valid text: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_text() {
        let columns = split("abcdefgh", 3).unwrap();
        assert_eq!(columns, vec!["adg", "beh", "cf"]);
    }

    #[test]
    fn test_split_single_column() {
        assert_eq!(split("abc", 1).unwrap(), vec!["abc"]);
    }

    #[test]
    fn test_split_zero_key_size() {
        assert!(matches!(split("abc", 0), Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_recombine_keeps_trailing_remainder() {
        let text = recombine(&["adg", "beh", "cf"]).unwrap();
        assert_eq!(text, "abcdefgh");
    }

    #[test]
    fn test_recombine_rejects_uneven_columns() {
        // A longer column after a shorter one
        assert!(matches!(
            recombine(&["ab", "a", "abc"]),
            Err(AnalysisError::InvalidInput(_))
        ));
        // Lengths differing by more than one
        assert!(matches!(
            recombine(&["abc", "a"]),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_recombine_empty() {
        let columns: [&str; 0] = [];
        assert!(recombine(&columns).is_err());
    }

    proptest! {
        #[test]
        fn split_then_recombine_is_identity(text in "[a-z]{1,200}", key_size in 1usize..20) {
            let columns = split(&text, key_size).unwrap();
            prop_assert_eq!(columns.len(), key_size);
            prop_assert_eq!(recombine(&columns).unwrap(), text);
        }
    }
}
