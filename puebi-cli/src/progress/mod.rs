//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for multi-file runs
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar; a single file gets none
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let pb = ProgressBar::new(total_files);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str, messages: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{filename}: {messages} message(s)"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_and_single_file_have_no_bar() {
        let mut quiet = ProgressReporter::new(true);
        quiet.init_files(10);
        assert!(!quiet.is_active());

        let mut single = ProgressReporter::new(false);
        single.init_files(1);
        assert!(!single.is_active());
        single.file_completed("pesan.txt", 3);
        single.finish();
    }

    #[test]
    fn test_bar_for_several_files() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(3);
        assert!(reporter.is_active());
        reporter.file_completed("a.txt", 1);
        reporter.finish();
    }
}
