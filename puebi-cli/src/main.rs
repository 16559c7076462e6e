//! puebi - PUEBI text normalization from the command line

use clap::Parser;
use puebi_cli::commands::Commands;
use puebi_cli::CliResult;
use std::process::ExitCode;

/// Normalize Indonesian text toward PUEBI spelling and punctuation
#[derive(Debug, Parser)]
#[command(name = "puebi", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    cli.command.execute()
}
