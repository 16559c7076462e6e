use std::sync::{Arc, OnceLock};

use super::lexicon::Lexicon;

/// TOML source of the built-in Indonesian lexicon
pub const DEFAULT_LEXICON_TOML: &str = include_str!("../../configs/lexicon/id.toml");

static DEFAULT_LEXICON: OnceLock<Arc<Lexicon>> = OnceLock::new();

/// The built-in Indonesian lexicon, compiled on first use
pub fn default_lexicon() -> Arc<Lexicon> {
    DEFAULT_LEXICON
        .get_or_init(|| {
            Arc::new(
                Lexicon::from_toml_str(DEFAULT_LEXICON_TOML)
                    .expect("Failed to load embedded lexicon"),
            )
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_metadata() {
        let lexicon = default_lexicon();
        assert_eq!(lexicon.code(), "id");
        assert_eq!(lexicon.currency_symbol(), "Rp");
        assert_eq!(lexicon.max_name_tokens(), 4);
    }

    #[test]
    fn test_default_lexicon_tables() {
        let lexicon = default_lexicon();
        for word in ["Indonesia", "Call", "Center", "ATM", "BCA"] {
            assert!(lexicon.is_exception(word), "{word} should be an exception");
        }
        for head in ["Jalan", "Bank", "PT", "RS", "Hai"] {
            assert!(lexicon.is_protected_head(head), "{head} should be a head");
        }
        assert!(!lexicon.is_exception("Bank"));
    }

    #[test]
    fn test_default_lexicon_is_memoized() {
        let first = default_lexicon();
        let second = default_lexicon();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
