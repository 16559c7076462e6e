//! Mid-sentence decapitalization
//!
//! Lowers words that were wrongly capitalized in the middle of a sentence:
//! a single forward pass per sentence that never touches the first word and
//! keeps acronyms, exceptions, words after a protected head and greeting
//! name runs. Words are classified against the sentence as it read before
//! the pass, so a head that gets lowered still protects the word after it.

use std::ops::Range;

use super::case;
use super::classifier::{classify, WordClass, WordContext};
use super::segmenter::sentences;
use super::tokenizer::{words, WordSpan};
use crate::language::Lexicon;

/// Counters collected by one decapitalization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecapStats {
    /// Sentences visited
    pub sentences: usize,
    /// Word tokens seen, sentence-initial ones included
    pub words: usize,
    /// Word tokens lowered
    pub lowered: usize,
}

/// Lower stray capitals in `doc` in place
///
/// `name_runs` are document-level code point ranges whose words must keep
/// their case (see [`super::greeting`]).
pub fn decapitalize(doc: &mut [char], name_runs: &[Range<usize>], lexicon: &Lexicon) -> DecapStats {
    let mut stats = DecapStats::default();
    let spans: Vec<_> = sentences(doc).collect();

    for sentence in spans {
        stats.sentences += 1;
        let body = &mut doc[sentence.span()];
        let tokens = words(body);
        stats.words += tokens.len();
        let snapshot: Vec<String> = tokens.iter().map(|&span| text_of(body, span)).collect();

        for wi in 1..tokens.len() {
            let span = tokens[wi];
            let word = &snapshot[wi];
            let previous = &snapshot[wi - 1];
            let absolute = sentence.start + span.start..sentence.start + span.end;

            let ctx = WordContext {
                word: word.as_str(),
                previous: Some(previous.as_str()),
                in_name_run: name_runs.iter().any(|run| contains(run, &absolute)),
            };

            let class = classify(&ctx, lexicon);
            if class.is_lowered() {
                for ch in &mut body[span.range()] {
                    *ch = case::lower(*ch);
                }
                stats.lowered += 1;
                log::trace!("lowered '{word}' after '{previous}'");
            } else if class != WordClass::Other {
                log::trace!("kept '{word}' ({class:?})");
            }
        }
    }

    stats
}

fn text_of(body: &[char], span: WordSpan) -> String {
    body[span.range()].iter().collect()
}

fn contains(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}
