//! Output types for the sanitizer

use serde::{Deserialize, Serialize};

/// Sanitized text with statistics about what changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// The normalized text
    pub text: String,
    /// Per-pass counters
    pub stats: SanitizeStats,
    /// Wall-clock processing time in microseconds
    pub processing_time_us: u64,
}

/// Counters collected while sanitizing one text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeStats {
    /// Sentences seen by the decapitalization pass
    pub sentences: usize,
    /// Word tokens seen by the decapitalization pass
    pub words: usize,
    /// Words lowered mid-sentence
    pub lowered: usize,
    /// Letters uppercased at sentence starts
    pub sentence_starts: usize,
    /// Name tokens title-cased after a greeting
    pub greeting_names: usize,
    /// Whether the output differs from the input
    pub changed: bool,
}
