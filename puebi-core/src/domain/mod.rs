//! Capitalization engine
//!
//! Sentence segmentation, word tokenization, word classification and the
//! passes built on them: greeting-name capitalization and mid-sentence
//! decapitalization. All of it works on code point slices, never bytes.

pub mod case;
pub mod classifier;
pub mod decapitalize;
pub mod greeting;
pub mod segmenter;
pub mod tokenizer;

pub use classifier::{classify, is_all_caps, is_title_case, WordClass, WordContext};
pub use decapitalize::{decapitalize, DecapStats};
pub use greeting::{capitalize_greeting_names, GreetingOutcome};
pub use segmenter::{is_terminal, sentences, Sentence, Sentences, TERMINALS};
pub use tokenizer::{words, WordSpan, WordSpans};
