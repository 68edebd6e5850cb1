use vigenere_analysis::caesar::{encrypt, rotate};
use vigenere_analysis::{
    samples, AnalysisConfig, AnalysisError, CoincidenceSearch, Cryptanalyst, Kasiski,
    LanguageProfile, LanguageRegistry,
};

const ENGLISH: &str = "itwasthebestoftimesitwastheworstoftimesitwastheageofwisdomitwastheageoffoolishness\
                       itwastheepochofbeliefitwastheepochofincredulityitwastheseasonoflightitwastheseasonofdarkness\
                       itwasthespringofhopeitwasthewinterofdespair";

#[test]
fn kasiski_recovers_english_plaintext() {
    let registry = LanguageRegistry::builtin();
    let analyst = Cryptanalyst::new(&registry);

    for key in ["lemon", "key", "crypto"] {
        let ciphertext = encrypt(ENGLISH, key).unwrap();
        let result = analyst.kasiski(&ciphertext, "English").unwrap();

        assert_eq!(result.key_size, key.len(), "key {key}");
        assert_eq!(result.key(), key);
        assert_eq!(result.plaintext, ENGLISH);
    }
}

#[test]
fn coincidence_recovers_english_plaintext() {
    let registry = LanguageRegistry::builtin();
    let analyst = Cryptanalyst::new(&registry);

    for key in ["lemon", "key"] {
        let ciphertext = encrypt(ENGLISH, key).unwrap();
        let result = analyst.coincidence(&ciphertext, "english").unwrap();

        assert_eq!(result.key_size, key.len(), "key {key}");
        assert_eq!(result.plaintext, ENGLISH);
    }
}

#[test]
fn input_is_normalized_before_analysis() {
    let registry = LanguageRegistry::builtin();
    let analyst = Cryptanalyst::new(&registry);

    let spaced: String = samples::KASISKI_EXERCISE
        .to_uppercase()
        .as_bytes()
        .chunks(5)
        .map(|c| String::from_utf8_lossy(c).into_owned())
        .collect::<Vec<_>>()
        .join(" ");

    let plain = analyst.kasiski(samples::KASISKI_EXERCISE, "french").unwrap();
    let spaced = analyst.kasiski(&spaced, "FRENCH").unwrap();

    assert_eq!(plain, spaced);
}

#[test]
fn short_french_text_with_known_key_size() {
    let registry = LanguageRegistry::builtin();
    let analyst = Cryptanalyst::new(&registry);

    let plaintext = "lacryptographieestunescienceamusante";
    let ciphertext = encrypt(plaintext, "ABCD").unwrap();

    // Too short for repeated polygrams
    assert!(matches!(
        analyst.kasiski(&ciphertext, "french"),
        Err(AnalysisError::KeyLengthUndetermined)
    ));

    // Nine letters per column is too few to pin every shift, but the output
    // keeps the input length and the last column resolves correctly
    let result = analyst.decrypt(&ciphertext, 4, "french").unwrap();
    assert_eq!(result.plaintext.len(), plaintext.len());
    assert_eq!(result.offsets[3], 3);
}

#[test]
fn tolerance_can_be_relaxed() {
    let registry = LanguageRegistry::builtin();

    let strict = Cryptanalyst::new(&registry).with_config(AnalysisConfig::default().with_tolerance(0.0));
    assert_eq!(
        strict.coincidence(samples::COINCIDENCE_EXERCISE, "french").unwrap().key_size,
        20
    );

    let relaxed =
        Cryptanalyst::new(&registry).with_config(AnalysisConfig::default().with_tolerance(0.03));
    assert_eq!(
        relaxed.coincidence(samples::COINCIDENCE_EXERCISE, "french").unwrap().key_size,
        1
    );
}

#[test]
fn estimators_plug_into_crack_with() {
    let registry = LanguageRegistry::builtin();
    let analyst = Cryptanalyst::new(&registry);

    let by_kasiski = analyst
        .crack_with(&Kasiski::default(), samples::KASISKI_EXERCISE, "french")
        .unwrap();
    let by_coincidence = analyst
        .crack_with(&CoincidenceSearch::new(0.074), samples::KASISKI_EXERCISE, "french")
        .unwrap();

    assert_eq!(by_kasiski, by_coincidence);
}

#[test]
fn injected_language_profile() {
    // A language that only ever writes "e"
    let mut frequencies = [0.0; 26];
    frequencies[4] = 100.0;
    let registry = LanguageRegistry::new()
        .with_profile(LanguageProfile::new("monotone", frequencies).with_coincidence(1.0));
    let analyst = Cryptanalyst::new(&registry);

    let ciphertext = encrypt(&"e".repeat(40), "dog").unwrap();
    let result = analyst.coincidence(&ciphertext, "monotone").unwrap();

    assert_eq!(result.key_size, 3);
    assert_eq!(result.key(), "dog");
    assert_eq!(result.plaintext, "e".repeat(40));
    assert_eq!(rotate(&result.plaintext, 3), "h".repeat(40));
}
