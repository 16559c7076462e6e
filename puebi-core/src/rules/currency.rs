//! Currency prefix formatting
//!
//! `rp 12.000`, `Rp. 12.000` and `RP12.000` all become `Rp12.000`.

use crate::language::Lexicon;

/// Rewrite a currency marker followed by digits to its canonical form
pub fn format_currency(text: &str, lexicon: &Lexicon) -> String {
    lexicon
        .currency_rules()
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
