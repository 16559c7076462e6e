//! Word tokenization
//!
//! A word is a maximal run of letters. Everything else (digits, punctuation,
//! symbols, whitespace) separates words and is never part of one. Apostrophes
//! and hyphens split too, so `Jean-Paul` yields two words.

use smallvec::SmallVec;
use std::ops::Range;

/// Word spans of one sentence; most messages fit inline
pub type WordSpans = SmallVec<[WordSpan; 16]>;

/// Half-open span of a word, relative to its sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
}

impl WordSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Check if character can be part of a word
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic()
}

/// Tokenize a sentence into word spans, in increasing order
pub fn words(sentence: &[char]) -> WordSpans {
    let mut spans = WordSpans::new();
    let n = sentence.len();
    let mut k = 0;

    while k < n {
        while k < n && !is_word_char(sentence[k]) {
            k += 1;
        }
        let start = k;
        while k < n && is_word_char(sentence[k]) {
            k += 1;
        }
        if k > start {
            spans.push(WordSpan { start, end: k });
        }
    }

    spans
}
