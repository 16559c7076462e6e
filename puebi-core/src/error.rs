//! Error types for lexicon loading and configuration
//!
//! Text operations never fail; only building a lexicon or a processor
//! configuration can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a lexicon or building a configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Lexicon content failed validation
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// A pattern in the lexicon is not a valid regular expression
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compilation error from the regex engine
        #[source]
        source: regex::Error,
    },

    /// TOML parse failure
    #[error("Failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),

    /// Lexicon file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for fallible puebi operations
pub type Result<T> = std::result::Result<T, Error>;
