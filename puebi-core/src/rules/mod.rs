//! String rewriting passes around the capitalization engine
//!
//! Single-pass rewrites: whitespace and punctuation spacing, preposition
//! fixes, fixed phrases, sentence-initial capitalization and currency
//! formatting.

pub mod currency;
pub mod phrases;
pub mod prepositions;
pub mod punctuation;
pub mod sentence_case;

pub use currency::format_currency;
pub use phrases::normalize_phrases;
pub use prepositions::fix_prepositions;
pub use punctuation::{fix_punctuation_spacing, normalize_whitespace, tighten_quotes};
pub use sentence_case::{capitalize_sentences, is_sentence_capitalized, title_case};
