//! Compiled lexicon
//!
//! A [`Lexicon`] is the runtime form of a [`LexiconConfig`]: word lists become
//! hash sets and every pattern is compiled once. It is immutable after
//! construction and safe to share between threads.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;

use super::config::{LexiconConfig, Substitution};
use crate::error::{Error, Result};

/// A compiled regex rewrite
#[derive(Debug, Clone)]
pub(crate) struct Rewrite {
    pub(crate) regex: Regex,
    pub(crate) replacement: String,
}

impl Rewrite {
    fn compile(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self {
            regex: compile(pattern)?,
            replacement: replacement.into(),
        })
    }

    fn from_substitution(sub: &Substitution) -> Result<Self> {
        Self::compile(&sub.pattern, sub.replacement.clone())
    }

    /// Apply to `text`, returning the rewritten string
    pub(crate) fn apply(&self, text: &str) -> String {
        self.regex
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// Word tables and precompiled patterns for one language variety
#[derive(Debug, Clone)]
pub struct Lexicon {
    config: LexiconConfig,
    exceptions: HashSet<String>,
    protected_heads: HashSet<String>,
    greeting: Option<Regex>,
    splits: Vec<Rewrite>,
    merges: Vec<Rewrite>,
    phrases: Vec<Rewrite>,
    currency: [Rewrite; 2],
}

impl Lexicon {
    /// Compile a validated configuration
    pub fn from_config(config: LexiconConfig) -> Result<Self> {
        config.validate().map_err(Error::InvalidLexicon)?;

        let exceptions = config.capitalization.exceptions.iter().cloned().collect();
        let protected_heads = config
            .capitalization
            .protected_heads
            .iter()
            .cloned()
            .collect();

        let greeting = if config.greeting.words.is_empty() {
            None
        } else {
            let words = alternation(&config.greeting.words);
            Some(compile(&format!(r"\b(?:{words})\b\s+([^\n\r,.!?;:()]+)"))?)
        };

        let preps = &config.prepositions;
        let mut splits = Vec::new();
        let shared: Vec<String> = preps
            .locatives
            .iter()
            .chain(preps.places.iter())
            .cloned()
            .collect();
        for prefix in &preps.prefixes {
            if !shared.is_empty() {
                splits.push(split_rule(prefix, &shared)?);
            }
        }
        if !preps.di_only.is_empty() {
            splits.push(split_rule("di", &preps.di_only)?);
        }

        let merges = preps
            .merges
            .iter()
            .map(Rewrite::from_substitution)
            .collect::<Result<Vec<_>>>()?;
        let phrases = config
            .phrases
            .iter()
            .map(Rewrite::from_substitution)
            .collect::<Result<Vec<_>>>()?;

        let symbol = regex::escape(&config.currency.symbol);
        let canonical = format!("{}${{1}}", escape_replacement(&config.currency.symbol));
        let currency = [
            Rewrite::compile(&format!(r"(?i)\b{symbol}\.?\s+([0-9])"), canonical.clone())?,
            Rewrite::compile(&format!(r"(?i)\b{symbol}([0-9])"), canonical)?,
        ];

        log::debug!(
            "compiled lexicon '{}': {} exceptions, {} protected heads, {} phrase rules",
            config.metadata.code,
            config.capitalization.exceptions.len(),
            config.capitalization.protected_heads.len(),
            phrases.len()
        );

        Ok(Self {
            config,
            exceptions,
            protected_heads,
            greeting,
            splits,
            merges,
            phrases,
            currency,
        })
    }

    /// Parse and compile a lexicon from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexiconConfig = toml::from_str(content)?;
        Self::from_config(config)
    }

    /// Load a lexicon from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Lexicon code, e.g. `id`
    pub fn code(&self) -> &str {
        &self.config.metadata.code
    }

    /// Human readable name
    pub fn name(&self) -> &str {
        &self.config.metadata.name
    }

    /// The configuration this lexicon was compiled from
    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    /// Exact, case-sensitive membership in the exception set
    pub fn is_exception(&self, word: &str) -> bool {
        self.exceptions.contains(word)
    }

    /// Exact, case-sensitive membership in the protected-head set
    pub fn is_protected_head(&self, word: &str) -> bool {
        self.protected_heads.contains(word)
    }

    /// Upper bound on name tokens capitalized after a greeting
    pub fn max_name_tokens(&self) -> usize {
        self.config.greeting.max_name_tokens
    }

    /// Currency symbol in its canonical spelling
    pub fn currency_symbol(&self) -> &str {
        &self.config.currency.symbol
    }

    pub(crate) fn greeting_pattern(&self) -> Option<&Regex> {
        self.greeting.as_ref()
    }

    pub(crate) fn preposition_rules(&self) -> impl Iterator<Item = &Rewrite> {
        self.splits.iter().chain(self.merges.iter())
    }

    pub(crate) fn phrase_rules(&self) -> &[Rewrite] {
        &self.phrases
    }

    pub(crate) fn currency_rules(&self) -> &[Rewrite] {
        &self.currency
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn alternation(words: &[String]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

fn escape_replacement(text: &str) -> String {
    text.replace('$', "$$")
}

/// `\b{prefix}(w1|w2|..)\b` -> `{prefix} $1`
fn split_rule(prefix: &str, words: &[String]) -> Result<Rewrite> {
    let pattern = format!(r"\b{}({})\b", regex::escape(prefix), alternation(words));
    Rewrite::compile(
        &pattern,
        format!("{} ${{1}}", escape_replacement(prefix)),
    )
}
