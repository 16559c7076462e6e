//! File pattern resolution using glob

use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

use crate::CliError;

/// Resolve file patterns to existing files, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        let before = files.len();
        for path in paths.filter_map(|entry| entry.ok()) {
            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
    }

    files.sort();
    files.dedup();
    log::debug!("Resolved {} file(s) from {} pattern(s)", files.len(), patterns.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_glob_and_dedup() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.md"] {
            fs::write(temp_dir.path().join(name), "isi").unwrap();
        }

        let dir = temp_dir.path().display();
        let files = resolve_patterns(&[format!("{dir}/*.txt"), format!("{dir}/a.txt")]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_missing_file() {
        let err = resolve_patterns(&["/nonexistent/pesan.txt".to_string()]).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::InvalidPattern(_))));
    }
}
