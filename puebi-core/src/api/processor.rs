//! Main sanitizer implementation

use std::time::Instant;

use crate::api::{Config, Output, Pass, SanitizeStats};
use crate::domain::{capitalize_greeting_names, decapitalize};
use crate::error::Result;
use crate::rules;

/// PUEBI sanitizer
///
/// Holds an immutable configuration; every call works on its own copy of the
/// input, so one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    config: Config,
}

impl Sanitizer {
    /// Create a sanitizer with the built-in lexicon and every pass enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sanitizer with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create a sanitizer whose lexicon is loaded from a TOML file
    pub fn from_lexicon_file(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        let config = Config::builder().lexicon_file(path).build()?;
        Ok(Self::with_config(config))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Normalize `text`
    ///
    /// Empty and whitespace-only input is returned unchanged; anything else
    /// goes through the enabled passes and is trimmed.
    pub fn sanitize(&self, text: &str) -> String {
        self.run(text).0
    }

    /// Normalize `text` and report what changed
    pub fn sanitize_with_report(&self, text: &str) -> Output {
        let start = Instant::now();
        let (text, stats) = self.run(text);
        Output {
            text,
            stats,
            processing_time_us: start.elapsed().as_micros() as u64,
        }
    }

    /// Normalize many independent texts
    #[cfg(feature = "parallel")]
    pub fn sanitize_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<String> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.sanitize(text.as_ref()))
            .collect()
    }

    /// Normalize many independent texts
    #[cfg(not(feature = "parallel"))]
    pub fn sanitize_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts
            .iter()
            .map(|text| self.sanitize(text.as_ref()))
            .collect()
    }

    fn run(&self, input: &str) -> (String, SanitizeStats) {
        let mut stats = SanitizeStats::default();
        if input.trim().is_empty() {
            return (input.to_string(), stats);
        }

        let lexicon = self.config.lexicon();
        let mut text = input.to_string();
        let mut name_runs = Vec::new();

        for pass in self.config.enabled_passes() {
            let before = text.len();
            text = match pass {
                Pass::Whitespace => rules::normalize_whitespace(&text),
                Pass::Punctuation => rules::fix_punctuation_spacing(&text),
                Pass::Prepositions => rules::fix_prepositions(&text, lexicon),
                Pass::Phrases => rules::normalize_phrases(&text, lexicon),
                Pass::SentenceCase => {
                    let mut doc: Vec<char> = text.chars().collect();
                    stats.sentence_starts = rules::capitalize_sentences(&mut doc);
                    doc.into_iter().collect()
                }
                Pass::GreetingNames => {
                    let outcome = capitalize_greeting_names(&text, lexicon);
                    stats.greeting_names = outcome.capitalized;
                    name_runs = outcome.name_runs;
                    outcome.text
                }
                Pass::Decapitalize => {
                    let mut doc: Vec<char> = text.chars().collect();
                    let decap = decapitalize(&mut doc, &name_runs, lexicon);
                    stats.sentences = decap.sentences;
                    stats.words = decap.words;
                    stats.lowered = decap.lowered;
                    doc.into_iter().collect()
                }
                Pass::Currency => rules::format_currency(&text, lexicon),
            };
            log::trace!("{pass}: {before} -> {} bytes", text.len());
        }

        let text = text.trim().to_string();
        stats.changed = text != input;
        (text, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_is_identity() {
        let sanitizer = Sanitizer::new();
        assert_eq!(sanitizer.sanitize(""), "");
        assert_eq!(sanitizer.sanitize("  \n\t "), "  \n\t ");
        assert!(!sanitizer.sanitize_with_report("   ").stats.changed);
    }

    #[test]
    fn test_output_is_trimmed() {
        let sanitizer = Sanitizer::new();
        assert_eq!(sanitizer.sanitize("  halo dunia  "), "Halo dunia");
    }

    #[test]
    fn test_report_counts() {
        let sanitizer = Sanitizer::new();
        let output = sanitizer.sanitize_with_report("hai andi, Apa Kabar?");
        assert_eq!(output.text, "Hai Andi, apa kabar?");
        assert_eq!(output.stats.sentence_starts, 1);
        assert_eq!(output.stats.greeting_names, 1);
        assert_eq!(output.stats.lowered, 2);
        assert_eq!(output.stats.sentences, 1);
        assert_eq!(output.stats.words, 4);
        assert!(output.stats.changed);
    }

    #[test]
    fn test_disabled_passes_are_skipped() {
        let config = Config::builder()
            .disable(Pass::Decapitalize)
            .disable(Pass::Currency)
            .build()
            .unwrap();
        let sanitizer = Sanitizer::with_config(config);
        assert_eq!(
            sanitizer.sanitize("bayar Rp 5000 ke Toko Baru"),
            "Bayar Rp 5000 ke Toko Baru"
        );
    }

    #[test]
    fn test_name_run_lowered_without_greeting_pass() {
        let config = Config::builder()
            .disable(Pass::GreetingNames)
            .build()
            .unwrap();
        let sanitizer = Sanitizer::with_config(config);
        assert_eq!(sanitizer.sanitize("Hai Luqmanul Hakim"), "Hai Luqmanul hakim");
    }

    #[test]
    fn test_batch_matches_single_calls() {
        let sanitizer = Sanitizer::new();
        let texts = ["dirumah saya", "", "Hubungi Call Center 1500 035."];
        let batch = sanitizer.sanitize_batch(&texts);
        let single: Vec<String> = texts.iter().map(|t| sanitizer.sanitize(t)).collect();
        assert_eq!(batch, single);
    }
}
