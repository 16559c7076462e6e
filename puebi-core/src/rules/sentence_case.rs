//! Sentence-initial capitalization and simple casing utilities

use crate::domain::case::{self, first_letter};
use crate::domain::is_terminal;

/// Uppercase the first letter of the text and the first letter after every
/// `.`, `!` or `?`. Returns the number of letters changed.
pub fn capitalize_sentences(doc: &mut [char]) -> usize {
    let mut changed = 0;
    let mut upper_at = |doc: &mut [char], idx: usize| {
        let upper = case::upper(doc[idx]);
        if upper != doc[idx] {
            doc[idx] = upper;
            changed += 1;
        }
    };

    if let Some(idx) = first_letter(doc, 0) {
        upper_at(doc, idx);
    }
    for pos in 0..doc.len() {
        if is_terminal(doc[pos]) {
            if let Some(idx) = first_letter(doc, pos + 1) {
                upper_at(doc, idx);
            }
        }
    }

    changed
}

/// Whether the first letter of the text is uppercase
///
/// Empty, whitespace-only and letterless text counts as capitalized.
pub fn is_sentence_capitalized(text: &str) -> bool {
    text.trim()
        .chars()
        .find(|c| c.is_alphabetic())
        .map_or(true, char::is_uppercase)
}

/// Capitalize the first letter of every whitespace-separated word and lower
/// the rest; words are joined with single spaces.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars: Vec<char> = word.chars().collect();
            case::title_word(&mut chars);
            chars.into_iter().collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
