//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tldw", version, about = "Summarize YouTube videos from the terminal")]
pub struct Cli {
    /// Config file path (defaults to the platform config directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive form (the default).
    Ui,
    /// Run the summarization backend.
    Serve(ServeArgs),
    /// Summarize one URL and print the result.
    Summarize(SummarizeArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the configured bind address.
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,
}

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Video URL to summarize.
    pub url: String,
}

impl Cli {
    /// The subcommand to run; no subcommand means the form UI.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Ui)
    }
}
