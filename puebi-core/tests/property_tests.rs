//! Property-based tests for the decapitalization invariants

use proptest::prelude::*;
use puebi_core::domain::{decapitalize, is_all_caps};
use puebi_core::{default_lexicon, sanitize};

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z]{1,5}|[a-z]{2,8}|[A-Z][a-z]{1,7}", 1..16)
}

fn decap(words: &[String]) -> Vec<String> {
    let lexicon = default_lexicon();
    let mut doc: Vec<char> = words.join(" ").chars().collect();
    decapitalize(&mut doc, &[], &lexicon);
    doc.into_iter()
        .collect::<String>()
        .split(' ')
        .map(str::to_string)
        .collect()
}

proptest! {
    #[test]
    fn proptest_first_word_is_never_changed(words in words()) {
        let output = decap(&words);
        prop_assert_eq!(&output[0], &words[0]);
    }

    #[test]
    fn proptest_acronyms_and_exceptions_are_never_lowered(words in words()) {
        let lexicon = default_lexicon();
        let output = decap(&words);
        prop_assert_eq!(output.len(), words.len());

        for (before, after) in words.iter().zip(&output) {
            let chars: Vec<char> = before.chars().collect();
            if is_all_caps(&chars) || lexicon.is_exception(before) {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn proptest_words_are_kept_or_lowered(words in words()) {
        let output = decap(&words);
        for (before, after) in words.iter().zip(&output) {
            prop_assert!(after == before || *after == before.to_lowercase());
        }
    }

    #[test]
    fn proptest_successor_of_head_is_kept(
        head in prop::sample::select(vec!["Jalan", "Bank", "PT", "RS", "Kota", "Hai"]),
        name in "[A-Z][a-z]{1,7}",
    ) {
        let words = vec!["Menuju".to_string(), head.to_string(), name.clone(), "baru".to_string()];
        let output = decap(&words);
        prop_assert_eq!(&output[2], &name);
    }

    #[test]
    fn proptest_sanitize_never_panics(text in "\\PC{0,200}") {
        let output = sanitize(&text);
        if text.trim().is_empty() {
            prop_assert_eq!(output, text);
        }
    }
}
