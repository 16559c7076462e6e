//! JSON output formatter

use super::{MessageRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs all messages as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<MessageRecord>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_message(&mut self, record: &MessageRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
