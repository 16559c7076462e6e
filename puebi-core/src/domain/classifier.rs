//! Word classification for the decapitalization pass

use crate::language::Lexicon;

/// Classification of a word token mid-sentence
///
/// Variants are listed in precedence order: the first one that applies wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordClass {
    /// Every letter uppercase (acronym)
    AllCaps,
    /// Listed in the lexicon's exception set
    Exception,
    /// Follows a protected head such as `Jalan` or `Bank`
    ProtectedSuccessor,
    /// Part of a name run captured after a greeting
    GreetingName,
    /// Uppercase first letter, lowercase rest
    TitleCase,
    /// Anything else
    Other,
}

impl WordClass {
    /// Whether a word of this class must keep its case
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            WordClass::AllCaps
                | WordClass::Exception
                | WordClass::ProtectedSuccessor
                | WordClass::GreetingName
        )
    }

    /// Whether the decapitalization pass lowers a word of this class
    pub fn is_lowered(self) -> bool {
        matches!(self, WordClass::TitleCase)
    }
}

/// At least one letter, and every letter uppercase
pub fn is_all_caps(word: &[char]) -> bool {
    let mut has_letter = false;
    for &ch in word {
        if ch.is_alphabetic() {
            has_letter = true;
            if !ch.is_uppercase() {
                return false;
            }
        }
    }
    has_letter
}

/// First character uppercase, every later letter lowercase
pub fn is_title_case(word: &[char]) -> bool {
    match word.split_first() {
        Some((first, rest)) if first.is_uppercase() => rest
            .iter()
            .all(|ch| !ch.is_alphabetic() || ch.is_lowercase()),
        _ => false,
    }
}

/// Context of one word inside its sentence
#[derive(Debug, Clone, Copy)]
pub struct WordContext<'a> {
    /// The word itself
    pub word: &'a str,
    /// Previous word of the same sentence, as it read before the pass
    pub previous: Option<&'a str>,
    /// Whether the word lies inside a greeting name run
    pub in_name_run: bool,
}

/// Classify a word using exact, case-sensitive lexicon lookups
pub fn classify(ctx: &WordContext<'_>, lexicon: &Lexicon) -> WordClass {
    let chars: Vec<char> = ctx.word.chars().collect();

    if is_all_caps(&chars) {
        WordClass::AllCaps
    } else if lexicon.is_exception(ctx.word) {
        WordClass::Exception
    } else if ctx.previous.is_some_and(|prev| lexicon.is_protected_head(prev)) {
        WordClass::ProtectedSuccessor
    } else if ctx.in_name_run {
        WordClass::GreetingName
    } else if is_title_case(&chars) {
        WordClass::TitleCase
    } else {
        WordClass::Other
    }
}
