//! Markdown output formatter

use super::{MessageRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs messages as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    message_count: usize,
    changed_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            message_count: 0,
            changed_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_message(&mut self, record: &MessageRecord) -> Result<()> {
        self.message_count += 1;
        if record.stats.changed {
            self.changed_count += 1;
        }
        writeln!(self.writer, "{}. {}", self.message_count, record.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total messages: {}, changed: {}*",
            self.message_count, self.changed_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::record;

    #[test]
    fn test_numbered_list_with_summary() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter.format_message(&record("dirumah", "Di rumah")).unwrap();
        formatter.format_message(&record("Halo.", "Halo.")).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(
            output,
            "1. Di rumah\n2. Halo.\n\n---\n*Total messages: 2, changed: 1*\n"
        );
    }
}
