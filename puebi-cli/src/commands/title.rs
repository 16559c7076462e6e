//! Title command implementation

use anyhow::Result;
use clap::Args;
use puebi_core::title_case;

/// Arguments for the title command
#[derive(Debug, Args)]
pub struct TitleArgs {
    /// Text to title-case; several arguments are joined with spaces
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

impl TitleArgs {
    /// Execute the title command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.render());
        Ok(())
    }

    fn render(&self) -> String {
        title_case(&self.text.join(" "))
    }
}
