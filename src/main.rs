//! omnom - Main entry point
//!
//! A terminal decision wizard for settling where to eat: a fixed dataset of
//! candidate restaurants is narrowed down one yes/no question at a time.

use anyhow::Context as _;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use omnom::app::App;
use omnom::cli::{Cli, Commands};
use omnom::ranker::{balance_score, rank_attributes};
use omnom::wizard::Wizard;
use omnom::Dataset;

/// Initialize tracing. With a log file, structured logs go there so the TUI
/// keeps the terminal to itself; otherwise they go to stderr (useful for the
/// non-interactive subcommands).
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Load the dataset from a file, or fall back to the embedded one.
fn load_dataset(path: Option<&Path>) -> omnom::Result<Dataset> {
    match path {
        Some(path) => Dataset::load_from_file(path),
        None => Dataset::embedded(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.log_file.as_deref())?;
    info!("omnom starting up");

    match cli.command {
        Some(Commands::Validate { dataset }) => {
            match Dataset::load_from_file(&dataset) {
                Ok(loaded) => {
                    println!(
                        "✓ Dataset is valid: {} ({} restaurants)",
                        dataset.display(),
                        loaded.len()
                    );
                }
                Err(e) => {
                    eprintln!("✗ Dataset validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Rank { dataset }) => {
            let loaded = load_dataset(dataset.as_deref())?;
            print_ranking(&loaded);
        }
        Some(Commands::Run { dataset }) => {
            let loaded = load_dataset(dataset.as_deref())?;
            run_wizard(loaded)?;
        }
        None => {
            info!("no command specified, launching the wizard");
            run_wizard(Dataset::embedded()?)?;
        }
    }

    Ok(())
}

/// Print the computed question order with balance scores.
fn print_ranking(dataset: &Dataset) {
    let order = rank_attributes(dataset);
    println!("Question order for {} restaurants:", dataset.len());
    for (i, &attribute) in order.as_slice().iter().enumerate() {
        println!(
            "  {}. {} (larger partition: {})",
            i + 1,
            attribute,
            balance_score(dataset, attribute)
        );
    }
}

/// Run the TUI wizard over a validated dataset.
fn run_wizard(dataset: Dataset) -> anyhow::Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut app = App::new(Wizard::new(dataset));
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}
