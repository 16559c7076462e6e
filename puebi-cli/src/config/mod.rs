//! CLI settings file
//!
//! ```toml
//! [output]
//! default_format = "json"
//! pretty_json = false
//!
//! [lexicon]
//! path = "lexicon.toml"
//! disabled_passes = ["currency"]
//! ```

use anyhow::{Context, Result};
use puebi_core::Pass;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Lexicon and pass selection
    #[serde(default)]
    pub lexicon: LexiconSettings,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Lexicon-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LexiconSettings {
    /// Lexicon file; relative paths are resolved against the settings file
    pub path: Option<PathBuf>,

    /// Passes to skip, by name
    pub disabled_passes: Vec<String>,
}

impl CliConfig {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let mut config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        if let (Some(lexicon), Some(base)) = (&config.lexicon.path, path.parent()) {
            if lexicon.is_relative() {
                config.lexicon.path = Some(base.join(lexicon));
            }
        }

        log::debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Passes disabled by the settings file
    pub fn disabled_passes(&self) -> Result<Vec<Pass>> {
        self.lexicon
            .disabled_passes
            .iter()
            .map(|name| {
                name.parse::<Pass>().map_err(|_| {
                    anyhow::Error::from(CliError::ConfigError(format!(
                        "unknown pass '{name}' in disabled_passes"
                    )))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert!(config.lexicon.path.is_none());
        assert!(config.disabled_passes().unwrap().is_empty());
    }

    #[test]
    fn test_from_file_resolves_lexicon_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("puebi.toml");
        std::fs::write(
            &path,
            "[output]\ndefault_format = \"json\"\n\n[lexicon]\npath = \"kamus.toml\"\ndisabled_passes = [\"currency\", \"Sentence-Case\"]\n",
        )
        .unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
        assert_eq!(config.lexicon.path, Some(temp_dir.path().join("kamus.toml")));
        assert_eq!(
            config.disabled_passes().unwrap(),
            vec![Pass::Currency, Pass::SentenceCase]
        );
    }

    #[test]
    fn test_unknown_pass_is_rejected() {
        let config = CliConfig {
            lexicon: LexiconSettings {
                path: None,
                disabled_passes: vec!["ejaan".to_string()],
            },
            ..Default::default()
        };
        let err = config.disabled_passes().unwrap_err();
        assert!(err.to_string().contains("unknown pass 'ejaan'"));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("puebi.toml");
        std::fs::write(&path, "[output\n").unwrap();

        let err = CliConfig::from_file(&path).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::ConfigError(_))));
    }
}
