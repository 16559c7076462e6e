//! Output formatting module

use anyhow::Result;
use puebi_core::SanitizeStats;
use serde::{Deserialize, Serialize};

/// One sanitized message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// File path, `stdin` or `argument`
    pub source: String,
    /// 1-based line or argument position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Text as read
    pub original: String,
    /// Sanitized text
    pub text: String,
    /// Counters reported by the sanitizer
    pub stats: SanitizeStats,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single message
    fn format_message(&mut self, record: &MessageRecord) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) fn record(original: &str, text: &str) -> MessageRecord {
    MessageRecord {
        source: "argument".to_string(),
        line: Some(1),
        original: original.to_string(),
        text: text.to_string(),
        stats: SanitizeStats {
            changed: original != text,
            ..Default::default()
        },
    }
}
