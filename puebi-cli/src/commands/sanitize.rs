//! Sanitize command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use puebi_core::{Config, Pass, Sanitizer};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use super::load_lexicon;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, split_messages, FileReader, Message};
use crate::output::{
    JsonFormatter, MarkdownFormatter, MessageRecord, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;
use crate::CliError;

/// Arguments for the sanitize command
#[derive(Debug, Args)]
pub struct SanitizeArgs {
    /// Messages to sanitize, one per argument
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the settings file's default_format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Lexicon file (default: built-in Indonesian lexicon)
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Settings file
    #[arg(short, long, value_name = "FILE", env = "PUEBI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip a pass (repeatable); see `puebi list passes`
    #[arg(long = "disable", value_name = "PASS")]
    pub disable: Vec<Pass>,

    /// Treat each file (or stdin) as one message instead of one per line
    #[arg(long)]
    pub whole: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One sanitized message per line
    Text,
    /// JSON array of messages with statistics
    Json,
    /// Markdown numbered list
    Markdown,
}

impl SanitizeArgs {
    /// Execute the sanitize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting sanitization");
        log::debug!("Arguments: {:?}", self);

        let settings = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let format = self.resolve_format(&settings)?;
        let sanitizer = self.build_sanitizer(&settings)?;

        let records = self.sanitize_sources(&sanitizer)?;
        let changed = records.iter().filter(|r| r.stats.changed).count();

        let mut formatter = self.create_formatter(format, settings.output.pretty_json)?;
        for record in &records {
            formatter.format_message(record)?;
        }
        formatter.finish()?;

        log::info!(
            "Sanitized {} message(s), {} changed",
            records.len(),
            changed
        );
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    fn resolve_format(&self, settings: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &settings.output.default_format;
        <OutputFormat as ValueEnum>::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{name}'")).into()
        })
    }

    fn build_sanitizer(&self, settings: &CliConfig) -> Result<Sanitizer> {
        let path = self.lexicon.as_deref().or(settings.lexicon.path.as_deref());
        let mut builder = Config::builder().lexicon(load_lexicon(path)?);

        for pass in settings.disabled_passes()?.into_iter().chain(self.disable.iter().copied()) {
            log::debug!("Pass disabled: {pass}");
            builder = builder.disable(pass);
        }

        Ok(Sanitizer::with_config(builder.build()?))
    }

    /// Sanitize positional texts, then files, then stdin when neither was given
    fn sanitize_sources(&self, sanitizer: &Sanitizer) -> Result<Vec<MessageRecord>> {
        let mut records: Vec<MessageRecord> = self
            .text
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                sanitize_message(
                    sanitizer,
                    Message {
                        source: "argument".to_string(),
                        line: Some(idx + 1),
                        text: text.clone(),
                    },
                )
            })
            .collect();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for path in &files {
                let source = path.display().to_string();
                let content = FileReader::read_text(path)?;
                let messages = split_messages(&source, &content, self.whole);
                let count = messages.len();

                records.extend(sanitize_all(sanitizer, messages));
                progress.file_completed(&source, count);
            }
            progress.finish();
        }

        if self.text.is_empty() && self.input.is_empty() {
            if io::stdin().is_terminal() {
                return Err(CliError::EmptyInput.into());
            }
            let content = FileReader::read_stdin()?;
            records.extend(sanitize_all(
                sanitizer,
                split_messages("stdin", &content, self.whole),
            ));
        }

        Ok(records)
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

fn sanitize_message(sanitizer: &Sanitizer, message: Message) -> MessageRecord {
    let output = sanitizer.sanitize_with_report(&message.text);
    MessageRecord {
        source: message.source,
        line: message.line,
        original: message.text,
        text: output.text,
        stats: output.stats,
    }
}

/// Messages are independent, so each file is sanitized in parallel
fn sanitize_all(sanitizer: &Sanitizer, messages: Vec<Message>) -> Vec<MessageRecord> {
    messages
        .into_par_iter()
        .map(|message| sanitize_message(sanitizer, message))
        .collect()
}
