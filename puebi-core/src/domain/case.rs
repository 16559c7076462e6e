//! Code-point preserving case mapping
//!
//! Every rewrite in the capitalization passes maps one code point to exactly
//! one code point, so spans computed before a pass stay valid after it.

/// Lowercase a single code point, keeping the first code point of a
/// multi-character mapping (`İ` lowers to `i`).
pub fn lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Uppercase a single code point; characters whose uppercase form is more
/// than one code point (`ß`) are left unchanged.
pub fn upper(ch: char) -> char {
    let mut mapped = ch.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// First letter uppercase, remaining characters lowercase
pub fn title_word(word: &mut [char]) {
    if let Some((first, rest)) = word.split_first_mut() {
        *first = upper(*first);
        for ch in rest {
            *ch = lower(*ch);
        }
    }
}

/// Index of the first letter at or after `start`
pub fn first_letter(chars: &[char], start: usize) -> Option<usize> {
    chars
        .get(start..)?
        .iter()
        .position(|c| c.is_alphabetic())
        .map(|offset| start + offset)
}
