//! Check command implementation

use anyhow::Result;
use clap::Args;
use puebi_core::is_sentence_capitalized;
use std::process::ExitCode;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Text to check; several arguments are joined with spaces
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

impl CheckArgs {
    /// Execute the check command; the exit status is 1 when the text does
    /// not start with a capital letter
    pub fn execute(&self) -> Result<ExitCode> {
        if self.is_capitalized() {
            println!("capitalized");
            Ok(ExitCode::SUCCESS)
        } else {
            println!("not capitalized");
            Ok(ExitCode::FAILURE)
        }
    }

    fn is_capitalized(&self) -> bool {
        is_sentence_capitalized(&self.text.join(" "))
    }
}
