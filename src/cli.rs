use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// omnom - a terminal decision wizard for settling where to eat
#[derive(Parser)]
#[command(name = "omnom")]
#[command(about = "Narrow down where to eat, one question at a time")]
#[command(version)]
pub struct Cli {
    /// Write structured logs to this file instead of stderr.
    ///
    /// The TUI owns the terminal, so without this flag log output is
    /// suppressed while the wizard is running.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive wizard (the default when no command is given)
    Run {
        /// Path to a dataset file to use instead of the embedded one
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },
    /// Validate a dataset file
    Validate {
        /// Path to the dataset file to validate
        dataset: PathBuf,
    },
    /// Print the computed question order with balance scores
    Rank {
        /// Path to a dataset file to rank instead of the embedded one
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
