//! Fixed-phrase normalization

use crate::language::Lexicon;

/// Apply the lexicon's phrase substitutions in order
pub fn normalize_phrases(text: &str, lexicon: &Lexicon) -> String {
    lexicon
        .phrase_rules()
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
