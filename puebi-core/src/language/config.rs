//! Configuration structures and validation
//!
//! This module defines the TOML schema for a lexicon.

use serde::{Deserialize, Serialize};

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub capitalization: Capitalization,
    #[serde(default)]
    pub greeting: Greeting,
    #[serde(default)]
    pub prepositions: Prepositions,
    #[serde(default)]
    pub phrases: Vec<Substitution>,
    pub currency: Currency,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Word tables used by the decapitalization pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Capitalization {
    #[serde(default)]
    pub exceptions: Vec<String>,
    #[serde(default)]
    pub protected_heads: Vec<String>,
}

/// Greeting-name rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default = "default_max_name_tokens")]
    pub max_name_tokens: usize,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            max_name_tokens: default_max_name_tokens(),
        }
    }
}

/// Preposition splitting and merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prepositions {
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub locatives: Vec<String>,
    #[serde(default)]
    pub places: Vec<String>,
    #[serde(default)]
    pub di_only: Vec<String>,
    #[serde(default)]
    pub merges: Vec<Substitution>,
}

/// A regex substitution applied verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Substitution {
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Currency prefix configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    pub symbol: String,
}

fn default_max_name_tokens() -> usize {
    4
}

impl LexiconConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }

        if self.currency.symbol.trim().is_empty() {
            return Err("currency.symbol must not be empty".to_string());
        }

        if self.greeting.max_name_tokens == 0 {
            return Err("greeting.max_name_tokens must be greater than 0".to_string());
        }

        let lists: [(&str, &[String]); 8] = [
            ("capitalization.exceptions", &self.capitalization.exceptions),
            (
                "capitalization.protected_heads",
                &self.capitalization.protected_heads,
            ),
            ("greeting.words", &self.greeting.words),
            ("prepositions.prefixes", &self.prepositions.prefixes),
            ("prepositions.locatives", &self.prepositions.locatives),
            ("prepositions.places", &self.prepositions.places),
            ("prepositions.di_only", &self.prepositions.di_only),
            ("metadata.name", std::slice::from_ref(&self.metadata.name)),
        ];
        for (name, words) in lists {
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(format!("{name} contains an empty entry"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> LexiconConfig {
        toml::from_str(
            r#"
[metadata]
code = "test"
name = "Test"

[capitalization]
exceptions = ["ATM"]

[currency]
symbol = "Rp"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = minimal();
        assert_eq!(config.greeting.max_name_tokens, 4);
        assert!(config.greeting.words.is_empty());
        assert!(config.phrases.is_empty());
        assert!(config.prepositions.merges.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_code_rejected() {
        let mut config = minimal();
        config.metadata.code = " ".to_string();
        assert!(config.validate().unwrap_err().contains("metadata.code"));
    }

    #[test]
    fn test_zero_name_bound_rejected() {
        let mut config = minimal();
        config.greeting.max_name_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_word_rejected() {
        let mut config = minimal();
        config.capitalization.protected_heads = vec!["Jalan".into(), "".into()];
        let err = config.validate().unwrap_err();
        assert!(err.contains("protected_heads"));
    }
}
