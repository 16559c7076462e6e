//! Lexicon data for normalization
//!
//! Word tables (exceptions, protected heads, greeting words, preposition
//! lists) and rewrite patterns are data described by a TOML schema. The
//! Indonesian lexicon is embedded; custom lexicons load from text or files.

pub mod config;
mod lexicon;
mod loader;

pub use config::LexiconConfig;
pub use lexicon::Lexicon;
pub use loader::{default_lexicon, DEFAULT_LEXICON_TOML};
