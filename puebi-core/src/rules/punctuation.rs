//! Whitespace and punctuation spacing

use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    multi_ws: Regex,
    space_before_punct: Regex,
    space_after_punct: Regex,
    space_after_dot: Regex,
    open_paren: Regex,
    close_paren: Regex,
    multi_dots: Regex,
    ellipsis_left: Regex,
    ellipsis_right: Regex,
    dash: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        multi_ws: Regex::new(r"\s+").expect("valid pattern"),
        space_before_punct: Regex::new(r"\s+([,.;:!?])").expect("valid pattern"),
        space_after_punct: Regex::new(r"([,;:!?])([^\s)])").expect("valid pattern"),
        // a digit on the left keeps simple decimals ("1.5") together
        space_after_dot: Regex::new(r"(^|[^\d])\.([^\d\s).])").expect("valid pattern"),
        open_paren: Regex::new(r"\(\s+").expect("valid pattern"),
        close_paren: Regex::new(r"\s+\)").expect("valid pattern"),
        multi_dots: Regex::new(r"[.]{3,}|…").expect("valid pattern"),
        ellipsis_left: Regex::new(r#"([^ \t\n\r(\["'])\.{3}"#).expect("valid pattern"),
        ellipsis_right: Regex::new(r#"\.{3}([^ \t\n\r)\]"'».,;:!?])"#).expect("valid pattern"),
        dash: Regex::new(r"\s*—\s*").expect("valid pattern"),
    })
}

/// Collapse whitespace runs to one space and drop spaces before `, . ; : ! ?`
pub fn normalize_whitespace(text: &str) -> String {
    let p = patterns();
    let text = p.multi_ws.replace_all(text, " ");
    p.space_before_punct.replace_all(&text, "${1}").into_owned()
}

/// Fix spacing around punctuation, ellipses, parentheses, quotes and dashes
pub fn fix_punctuation_spacing(text: &str) -> String {
    let p = patterns();

    let s = p.space_before_punct.replace_all(text, "${1}");

    let s = p.multi_dots.replace_all(&s, "...");
    let s = p.ellipsis_left.replace_all(&s, "${1} ...");
    let s = p.ellipsis_right.replace_all(&s, "... ${1}");

    let s = p.space_after_punct.replace_all(&s, "${1} ${2}");
    let s = p.space_after_dot.replace_all(&s, "${1}. ${2}");

    let s = p.open_paren.replace_all(&s, "(");
    let s = p.close_paren.replace_all(&s, ")");

    let s = tighten_quotes(&s);
    let s = p.dash.replace_all(&s, "—");

    p.multi_ws.replace_all(&s, " ").into_owned()
}

/// Remove whitespace just inside each `"…"` pair
///
/// Quotes pair up left to right; an unmatched last quote counts as opening.
pub fn tighten_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut open = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '"' {
            out.push(ch);
            continue;
        }

        if open {
            let kept = out.trim_end().len();
            out.truncate(kept);
            out.push('"');
        } else {
            out.push('"');
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
        }
        open = !open;
    }

    out
}
