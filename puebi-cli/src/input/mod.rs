//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// One text to sanitize, with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// File path, `stdin` or `argument`
    pub source: String,
    /// 1-based line (or argument position); `None` for whole-file messages
    pub line: Option<usize>,
    /// Raw text
    pub text: String,
}

/// Split `content` into messages: one per non-blank line, or the whole
/// content as a single message when `whole` is set
pub fn split_messages(source: &str, content: &str, whole: bool) -> Vec<Message> {
    if whole {
        if content.trim().is_empty() {
            return Vec::new();
        }
        return vec![Message {
            source: source.to_string(),
            line: None,
            text: content.to_string(),
        }];
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| Message {
            source: source.to_string(),
            line: Some(idx + 1),
            text: line.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_by_line_skips_blank_lines() {
        let messages = split_messages("pesan.txt", "satu\n\n  \ndua\r\n", false);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].line, Some(1));
        assert_eq!(messages[1].text, "dua");
        assert_eq!(messages[1].line, Some(4));
    }

    #[test]
    fn test_whole_content() {
        let messages = split_messages("stdin", "satu\ndua\n", true);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].line, None);
        assert_eq!(messages[0].text, "satu\ndua\n");
        assert!(split_messages("stdin", " \n", true).is_empty());
    }
}
