//! List command implementation

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use puebi_core::{Lexicon, Pass};
use std::path::PathBuf;

use super::load_lexicon;
use super::sanitize::OutputFormat;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub subcommand: ListCommands,

    /// Lexicon file to list from (default: built-in lexicon)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub lexicon: Option<PathBuf>,
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// Words that keep their capitals anywhere in a sentence
    Exceptions,

    /// Words whose successor keeps its capital
    Heads,

    /// Greeting words that introduce a name
    Greetings,

    /// Pipeline passes, in execution order
    Passes,

    /// Available output formats
    Formats,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let lexicon = load_lexicon(self.lexicon.as_deref())?;
        for entry in entries(self.subcommand, &lexicon) {
            println!("{entry}");
        }
        Ok(())
    }
}

fn entries(what: ListCommands, lexicon: &Lexicon) -> Vec<String> {
    let config = lexicon.config();
    match what {
        ListCommands::Exceptions => config.capitalization.exceptions.clone(),
        ListCommands::Heads => config.capitalization.protected_heads.clone(),
        ListCommands::Greetings => config.greeting.words.clone(),
        ListCommands::Passes => Pass::ALL.iter().map(|p| p.name().to_string()).collect(),
        ListCommands::Formats => OutputFormat::value_variants()
            .iter()
            .filter_map(|f| f.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect(),
    }
}
