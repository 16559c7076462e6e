//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use puebi_core::{default_lexicon, Lexicon};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use crate::CliResult;

pub mod check;
pub mod generate_config;
pub mod list;
pub mod sanitize;
pub mod title;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize messages from arguments, files or stdin
    Sanitize(sanitize::SanitizeArgs),

    /// Check whether a text starts with a capital letter
    Check(check::CheckArgs),

    /// Title-case a text
    Title(title::TitleArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Write the built-in lexicon as a starting point for a custom one
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List lexicon entries, passes or output formats
    List(list::ListArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<ExitCode> {
        match self {
            Commands::Sanitize(args) => args.execute().map(|()| ExitCode::SUCCESS),
            Commands::Check(args) => args.execute(),
            Commands::Title(args) => args.execute().map(|()| ExitCode::SUCCESS),
            Commands::Validate(args) => args.execute().map(|()| ExitCode::SUCCESS),
            Commands::GenerateConfig(args) => args.execute().map(|()| ExitCode::SUCCESS),
            Commands::List(args) => args.execute().map(|()| ExitCode::SUCCESS),
        }
    }
}

/// Load a lexicon file, or fall back to the built-in lexicon
pub(crate) fn load_lexicon(path: Option<&Path>) -> Result<Arc<Lexicon>> {
    match path {
        Some(path) => {
            let lexicon = Lexicon::from_file(path)
                .with_context(|| format!("Failed to load lexicon {}", path.display()))?;
            log::info!("Using lexicon '{}' from {}", lexicon.code(), path.display());
            Ok(Arc::new(lexicon))
        }
        None => Ok(default_lexicon()),
    }
}
