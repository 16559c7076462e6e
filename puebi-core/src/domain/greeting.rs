//! Greeting-name capitalization
//!
//! After a greeting word (`Hai`) the following clause, up to the first
//! `, . ! ? ; : ( )` or line break, is taken to start with a personal name.
//! Its first few whitespace-separated tokens are title-cased in place. When
//! the whole clause fits within that bound it is reported as a name run so
//! the decapitalization pass leaves it alone.

use std::ops::Range;

use super::case;
use crate::language::Lexicon;

/// Result of the greeting pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingOutcome {
    /// Rewritten text, same number of code points as the input
    pub text: String,
    /// Code point ranges of clauses that consist of a name only
    pub name_runs: Vec<Range<usize>>,
    /// Tokens that were title-cased
    pub capitalized: usize,
}

/// Only letters plus name punctuation are title-cased
fn is_name_token(token: &[char]) -> bool {
    token
        .iter()
        .all(|&c| c.is_alphabetic() || c == '\'' || c == '-')
}

/// Whitespace-separated tokens of `segment`, as ranges into it
fn fields(segment: &[char]) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut k = 0;
    while k < segment.len() {
        while k < segment.len() && segment[k].is_whitespace() {
            k += 1;
        }
        let start = k;
        while k < segment.len() && !segment[k].is_whitespace() {
            k += 1;
        }
        if k > start {
            out.push(start..k);
        }
    }
    out
}

/// Capitalize names that follow a greeting word
pub fn capitalize_greeting_names(text: &str, lexicon: &Lexicon) -> GreetingOutcome {
    let Some(pattern) = lexicon.greeting_pattern() else {
        return GreetingOutcome {
            text: text.to_string(),
            ..Default::default()
        };
    };

    let mut doc: Vec<char> = text.chars().collect();
    let mut name_runs = Vec::new();
    let mut capitalized = 0;
    let limit = lexicon.max_name_tokens();

    for caps in pattern.captures_iter(text) {
        let Some(clause) = caps.get(1) else {
            continue;
        };
        let offset = text[..clause.start()].chars().count();
        let len = clause.as_str().chars().count();
        let segment = &mut doc[offset..offset + len];

        let tokens = fields(segment);
        for token in tokens.iter().take(limit) {
            let chars = &mut segment[token.clone()];
            if is_name_token(chars) {
                case::title_word(chars);
                capitalized += 1;
            }
        }

        if let (Some(first), Some(last)) = (tokens.first(), tokens.last()) {
            if tokens.len() <= limit {
                name_runs.push(offset + first.start..offset + last.end);
            }
        }
    }

    if capitalized > 0 {
        log::trace!("capitalized {capitalized} greeting name token(s)");
    }

    GreetingOutcome {
        text: doc.into_iter().collect(),
        name_runs,
        capitalized,
    }
}
