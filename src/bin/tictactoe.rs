//! Tic-tac-toe in the terminal
//!
//! This CLI provides:
//! - Interactive games between any mix of human and computer players
//! - Batch simulations between computer players

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe with a minimax opponent", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play(tictactoe_ai::cli::commands::play::PlayArgs),

    /// Play computer players against each other
    Simulate(tictactoe_ai::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fallback = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => tictactoe_ai::cli::commands::play::execute(args),
        Commands::Simulate(args) => tictactoe_ai::cli::commands::simulate::execute(args),
    }
}
