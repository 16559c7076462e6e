//! Sentence segmentation
//!
//! Splits a document (a slice of code points) into sentence spans. A sentence
//! ends at the first `.`, `!` or `?`; the terminal and the whitespace after it
//! form the separator, which callers copy through verbatim.

use std::ops::Range;

/// Sentence-terminal marks
pub const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Check if character is a sentence terminal
pub fn is_terminal(ch: char) -> bool {
    TERMINALS.contains(&ch)
}

/// A sentence span over a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    /// First code point of the sentence
    pub start: usize,
    /// One past the last code point, excluding the terminal
    pub end: usize,
    /// Terminal mark that closed the sentence, if any
    pub terminal: Option<char>,
    /// Start of the next sentence (after terminal and following whitespace)
    pub next: usize,
}

impl Sentence {
    /// Span of the sentence body
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Span of the separator (terminal plus trailing whitespace)
    pub fn separator(&self) -> Range<usize> {
        self.end..self.next
    }

    /// Whether the body is empty (consecutive terminals)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Lazy iterator over the sentences of a document
///
/// A clone continues from the same position; call [`sentences`] again to
/// restart from the beginning.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    chars: &'a [char],
    pos: usize,
}

/// Segment a document into sentences
pub fn sentences(chars: &[char]) -> Sentences<'_> {
    Sentences { chars, pos: 0 }
}

impl Iterator for Sentences<'_> {
    type Item = Sentence;

    fn next(&mut self) -> Option<Sentence> {
        let n = self.chars.len();
        if self.pos >= n {
            return None;
        }

        let start = self.pos;
        let end = self.chars[start..]
            .iter()
            .position(|&c| is_terminal(c))
            .map_or(n, |offset| start + offset);

        let mut next = end;
        let terminal = self.chars.get(end).copied();
        if terminal.is_some() {
            next += 1;
        }
        while next < n && self.chars[next].is_whitespace() {
            next += 1;
        }

        self.pos = next;
        Some(Sentence {
            start,
            end,
            terminal,
            next,
        })
    }
}

impl std::iter::FusedIterator for Sentences<'_> {}
