//! File and stdin reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reader for UTF-8 text sources
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        log::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }

    /// Read all of stdin as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        Self::read_from(io::stdin().lock()).context("Failed to read stdin")
    }

    fn read_from(mut reader: impl Read) -> Result<String> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("pesan.txt");

        let content = "Hai Andi, transfer berhasil.\nTerima kasih.";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.txt"));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("biner.txt");
        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(FileReader::read_text(&file_path).is_err());
    }

    #[test]
    fn test_read_from_reader() {
        let content = FileReader::read_from("dirumah saya".as_bytes()).unwrap();
        assert_eq!(content, "dirumah saya");
    }
}
