use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::console::Console;
use connect_four::game::GameSession;

/// Play Connect 4 against another person on the same console.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect 4", version)]
struct Cli {
    /// Number of rows for the game board.
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns for the game board.
    #[arg(long)]
    columns: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Print a config file with all default values and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?
        .with_overrides(cli.rows, cli.columns);
    config.validate().context("invalid board dimensions")?;

    let session = GameSession::new(config.board.rows, config.board.columns);
    let stdin = io::stdin();
    let mut console = Console::new(session, stdin.lock(), io::stdout());
    console.run().context("console I/O failed")?;

    Ok(())
}
