//! Configuration API for sanitization

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::language::{default_lexicon, Lexicon};

/// One step of the sanitization pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pass {
    /// Collapse whitespace, drop spaces before punctuation
    Whitespace,
    /// Spacing around punctuation, ellipses, brackets, quotes and dashes
    Punctuation,
    /// Split glued locative prepositions, merge `ke pada`/`dari pada`
    Prepositions,
    /// Fixed-phrase substitutions
    Phrases,
    /// Uppercase sentence-initial letters
    SentenceCase,
    /// Title-case names after a greeting
    GreetingNames,
    /// Lower stray mid-sentence capitals
    Decapitalize,
    /// Canonical currency prefix
    Currency,
}

impl Pass {
    /// Every pass, in execution order
    pub const ALL: [Pass; 8] = [
        Pass::Whitespace,
        Pass::Punctuation,
        Pass::Prepositions,
        Pass::Phrases,
        Pass::SentenceCase,
        Pass::GreetingNames,
        Pass::Decapitalize,
        Pass::Currency,
    ];

    /// Kebab-case name used in configuration and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Pass::Whitespace => "whitespace",
            Pass::Punctuation => "punctuation",
            Pass::Prepositions => "prepositions",
            Pass::Phrases => "phrases",
            Pass::SentenceCase => "sentence-case",
            Pass::GreetingNames => "greeting-names",
            Pass::Decapitalize => "decapitalize",
            Pass::Currency => "currency",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Pass::ALL
            .into_iter()
            .find(|pass| pass.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Configuration(format!("unknown pass '{s}'")))
    }
}

/// Sanitizer configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) lexicon: Arc<Lexicon>,
    pub(crate) disabled: Vec<Pass>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon: default_lexicon(),
            disabled: Vec::new(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Lexicon used by the lexicon-driven passes
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Whether `pass` runs
    pub fn is_enabled(&self, pass: Pass) -> bool {
        !self.disabled.contains(&pass)
    }

    /// Passes that run, in execution order
    pub fn enabled_passes(&self) -> impl Iterator<Item = Pass> + '_ {
        Pass::ALL.into_iter().filter(|&p| self.is_enabled(p))
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    lexicon: Option<Arc<Lexicon>>,
    lexicon_path: Option<PathBuf>,
    disabled: Vec<Pass>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already compiled lexicon
    pub fn lexicon(mut self, lexicon: impl Into<Arc<Lexicon>>) -> Self {
        self.lexicon = Some(lexicon.into());
        self
    }

    /// Load the lexicon from a TOML file at build time
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Skip a pass
    pub fn disable(mut self, pass: Pass) -> Self {
        if !self.disabled.contains(&pass) {
            self.disabled.push(pass);
        }
        self
    }

    /// Run a pass (all passes run by default)
    pub fn enable(mut self, pass: Pass) -> Self {
        self.disabled.retain(|&p| p != pass);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let lexicon = match (self.lexicon, self.lexicon_path) {
            (Some(_), Some(path)) => {
                return Err(Error::Configuration(format!(
                    "both a lexicon and a lexicon file ({}) were given",
                    path.display()
                )));
            }
            (Some(lexicon), None) => lexicon,
            (None, Some(path)) => Arc::new(Lexicon::from_file(path)?),
            (None, None) => default_lexicon(),
        };

        let mut disabled = self.disabled;
        disabled.sort();

        Ok(Config { lexicon, disabled })
    }
}
