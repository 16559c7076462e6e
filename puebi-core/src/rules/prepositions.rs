//! Preposition splitting and merging
//!
//! Locative `di`/`ke` written together with a place word is split
//! (`dirumah` -> `di rumah`); `ke pada` and `dari pada` are merged.

use crate::language::Lexicon;

/// Apply the lexicon's preposition rules in order
pub fn fix_prepositions(text: &str, lexicon: &Lexicon) -> String {
    lexicon
        .preposition_rules()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
