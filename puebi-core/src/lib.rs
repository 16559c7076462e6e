//! Indonesian text normalization toward PUEBI conventions
//!
//! This crate tidies short, free-form Indonesian messages: it fixes spacing
//! around punctuation, splits glued locative prepositions, normalizes a few
//! fixed phrases, capitalizes sentence starts and lowers capitals that were
//! typed by mistake in the middle of a sentence, while keeping acronyms,
//! listed exceptions and names that follow a proper-noun head. Finally it
//! writes currency amounts as `Rp12.000`.
//!
//! # Architecture
//!
//! - **Domain layer** ([`domain`]): sentence segmentation, word tokenization,
//!   word classification, greeting names and the decapitalization pass
//! - **Rules** ([`rules`]): single-pass string rewrites around the engine
//! - **Language data** ([`language`]): lexicons loaded from TOML
//! - **API** ([`api`]): [`Sanitizer`] and its [`Config`]
//!
//! # Example
//!
//! ```rust
//! use puebi_core::{sanitize, is_sentence_capitalized, title_case};
//!
//! let text = sanitize("Hai luqmanul hakim, Transfer Real Time Berhasil sebesar rp 12.000.");
//! assert_eq!(text, "Hai Luqmanul Hakim, transfer real time berhasil sebesar Rp12.000.");
//!
//! assert!(is_sentence_capitalized(&text));
//! assert_eq!(title_case("bank rakyat indonesia"), "Bank Rakyat Indonesia");
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod language;
pub mod rules;

use std::sync::OnceLock;

pub use api::{Config, ConfigBuilder, Output, Pass, SanitizeStats, Sanitizer};
pub use error::{Error, Result};
pub use language::{default_lexicon, Lexicon, LexiconConfig, DEFAULT_LEXICON_TOML};
pub use rules::{is_sentence_capitalized, title_case};

static DEFAULT_SANITIZER: OnceLock<Sanitizer> = OnceLock::new();

fn default_sanitizer() -> &'static Sanitizer {
    DEFAULT_SANITIZER.get_or_init(Sanitizer::new)
}

/// Normalize `text` with the built-in Indonesian lexicon
///
/// Empty and whitespace-only input is returned unchanged.
pub fn sanitize(text: &str) -> String {
    default_sanitizer().sanitize(text)
}
