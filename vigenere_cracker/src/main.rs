use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vigenere_analysis::{
    caesar, coincidence, kasiski, samples, text, AnalysisConfig, Ciphertext, Cryptanalyst,
    Decryption, LanguageRegistry,
};

/// Command-line arguments for the Vigenère cracker program.
#[derive(Parser, Debug)]
#[command(author, version, about = "Recover Vigenère plaintext without the key", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "info", "vigenere_analysis=debug")
    #[arg(long, global = true, default_value = "warn", help = "Default log filter")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crack with Kasiski examination
    Kasiski {
        #[command(flatten)]
        input: InputArgs,

        /// Language of the plaintext
        #[arg(short, long, default_value = "french", help = "Language of the plaintext")]
        lang: String,

        /// Shortest repeated polygram to consider
        #[arg(long, default_value_t = kasiski::DEFAULT_MIN_REPEAT_LEN, help = "Shortest repeat length")]
        min_repeat: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Crack with the index of coincidence
    Ic {
        #[command(flatten)]
        input: InputArgs,

        /// Language of the plaintext (french, english, german, spanish, italian)
        #[arg(short, long, default_value = "french", help = "Language of the plaintext")]
        lang: String,

        /// Allowed gap below the language's expected index of coincidence
        #[arg(
            short,
            long,
            env = "VIGENERE_IC_TOLERANCE",
            default_value_t = coincidence::DEFAULT_TOLERANCE,
            help = "IC tolerance"
        )]
        tolerance: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Decrypt by frequency analysis with a known key length
    Decrypt {
        #[command(flatten)]
        input: InputArgs,

        #[arg(short, long, default_value = "french", help = "Language of the plaintext")]
        lang: String,

        #[arg(short, long, help = "Length of the repeating key")]
        key_size: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Encrypt with a known key
    Encrypt {
        #[command(flatten)]
        input: InputArgs,

        #[arg(short, long, help = "Key string for the cipher")]
        key: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print statistics about a ciphertext without decrypting it
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, default_value_t = kasiski::DEFAULT_MIN_REPEAT_LEN, help = "Shortest repeat length")]
        min_repeat: usize,
    },

    /// Crack the two built-in exercise ciphertexts
    Demo,

    /// List supported languages
    Languages,
}

/// Where the text to process comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Path to the input file
    #[arg(short, long, help = "Path to the input file")]
    file: Option<String>,

    /// Text given directly on the command line
    #[arg(long, help = "Input text")]
    text: Option<String>,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Path to the output file; stdout when omitted
    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,
}

/// Main entry point for the Vigenère cracker.
fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    init_logging(&cli.log_level);

    let registry = LanguageRegistry::builtin();

    match cli.command {
        Command::Kasiski {
            input,
            lang,
            min_repeat,
            output,
        } => {
            let config = AnalysisConfig::default().with_min_repeat_len(min_repeat);
            let analyst = Cryptanalyst::new(&registry).with_config(config);
            let decryption = analyst.kasiski(&read_input(&input)?, &lang)?;
            report(&decryption, &output)
        }
        Command::Ic {
            input,
            lang,
            tolerance,
            output,
        } => {
            let config = AnalysisConfig::default().with_tolerance(tolerance);
            let analyst = Cryptanalyst::new(&registry).with_config(config);
            let decryption = analyst.coincidence(&read_input(&input)?, &lang)?;
            report(&decryption, &output)
        }
        Command::Decrypt {
            input,
            lang,
            key_size,
            output,
        } => {
            let analyst = Cryptanalyst::new(&registry);
            let decryption = analyst.decrypt(&read_input(&input)?, key_size, &lang)?;
            report(&decryption, &output)
        }
        Command::Encrypt { input, key, output } => {
            let plaintext = Ciphertext::new(&read_input(&input)?)?;
            let ciphertext = caesar::encrypt(plaintext.as_str(), &key)?;
            write_output(&ciphertext, &output)
        }
        Command::Analyze { input, min_repeat } => {
            let ciphertext = Ciphertext::new(&read_input(&input)?)?;
            print!("{}", analyze(&ciphertext, min_repeat));
            Ok(())
        }
        Command::Demo => demo(&registry),
        Command::Languages => {
            for language in registry.languages() {
                let ic = registry
                    .get(language)
                    .ok()
                    .and_then(|p| p.coincidence())
                    .map(|target| format!("IC {target}"))
                    .unwrap_or_else(|| "frequencies only".to_string());
                println!("{language:<12} {ic}");
            }
            Ok(())
        }
    }
}

/// Installs the stderr log subscriber; RUST_LOG overrides `default_level`.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the input text from the file or the command line.
fn read_input(input: &InputArgs) -> Result<String> {
    match (&input.file, &input.text) {
        (Some(path), _) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {path}"))?;
            // Line breaks are layout, not ciphertext
            Ok(content.split_whitespace().collect::<Vec<_>>().join(" "))
        }
        (None, Some(text)) => Ok(text.clone()),
        (None, None) => anyhow::bail!("either --file or --text is required"),
    }
}

/// Prints the recovered key and writes the plaintext.
fn report(decryption: &Decryption, output: &OutputArgs) -> Result<()> {
    if decryption.plaintext.len() < 50 {
        warn!("text may be too short for reliable analysis");
    }

    println!("Found key length: {}", decryption.key_size);
    println!("Key: {}", decryption.key());
    write_output(&decryption.plaintext, output)
}

fn write_output(text: &str, output: &OutputArgs) -> Result<()> {
    match &output.output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write output file {path}"))?;
            info!(path = %path, "output written");
            println!("Output saved to: {path}");
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Summarizes letter statistics and Kasiski votes for a ciphertext.
fn analyze(ciphertext: &Ciphertext, min_repeat: usize) -> String {
    let mut summary = String::new();
    let letters = ciphertext.as_str();

    summary.push_str(&format!("Length: {}\n", ciphertext.len()));
    summary.push_str(&format!(
        "Index of coincidence: {:.4}\n",
        coincidence::index_of_coincidence(letters)
    ));
    if let Some(letter) = text::most_frequent_letter(ciphertext.as_bytes()) {
        summary.push_str(&format!("Most frequent letter: {}\n", letter as char));
    }

    let votes = kasiski::ranked_votes(letters, min_repeat);
    if votes.is_empty() {
        summary.push_str("Kasiski: no informative repeats\n");
    } else {
        summary.push_str("Kasiski votes (key length: votes):\n");
        for (divisor, count) in votes.iter().take(5) {
            summary.push_str(&format!("  {divisor:>4}: {count}\n"));
        }
    }

    summary.push_str("Mean column IC:\n");
    for key_size in 1..=ciphertext.len().min(10) {
        if let Ok(ic) = coincidence::mean_column_coincidence(letters, key_size) {
            summary.push_str(&format!("  {key_size:>4}: {ic:.4}\n"));
        }
    }

    summary
}

/// Runs both methods on the bundled French exercises.
fn demo(registry: &LanguageRegistry) -> Result<()> {
    let analyst = Cryptanalyst::new(registry);

    println!("Exercise 1: Kasiski examination");
    let decryption = analyst.kasiski(samples::KASISKI_EXERCISE, "french")?;
    println!("Key: {} (length {})", decryption.key(), decryption.key_size);
    println!("{}\n", decryption.plaintext);

    println!("Exercise 2: index of coincidence");
    let decryption = analyst.coincidence(samples::COINCIDENCE_EXERCISE, "french")?;
    println!("Key: {} (length {})", decryption.key(), decryption.key_size);
    println!("{}", decryption.plaintext);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ic_command() {
        let cli = Cli::try_parse_from([
            "vigenere_cracker", "ic", "--text", "abc", "-l", "english", "-t", "0.02",
        ])
        .unwrap();
        match cli.command {
            Command::Ic { lang, tolerance, .. } => {
                assert_eq!(lang, "english");
                assert_eq!(tolerance, 0.02);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["vigenere_cracker", "kasiski"]).is_err());
        assert!(
            Cli::try_parse_from(["vigenere_cracker", "kasiski", "--file", "a", "--text", "b"]).is_err()
        );
    }

    #[test]
    fn test_analyze_summary() {
        let ciphertext = Ciphertext::new(samples::KASISKI_EXERCISE).unwrap();
        let summary = analyze(&ciphertext, 3);

        assert!(summary.contains("Length: 295"));
        assert!(summary.contains("Kasiski votes"));
        assert!(summary.contains("\n     4: "));
    }
}
