//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use puebi_core::DEFAULT_LEXICON_TOML;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let Some(output) = &self.output else {
            print!("{DEFAULT_LEXICON_TOML}");
            return Ok(());
        };

        std::fs::write(output, DEFAULT_LEXICON_TOML)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Lexicon written to {}", output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the word lists and phrase rules");
        println!("2. Validate your lexicon:");
        println!("   puebi validate --lexicon {}", output.display());
        println!("3. Use it for sanitizing:");
        println!(
            "   puebi sanitize -i messages.txt --lexicon {}",
            output.display()
        );

        Ok(())
    }
}
