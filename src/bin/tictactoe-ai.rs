//! tictactoe-ai CLI - play against the engine or pit difficulty levels
//! against each other

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_ai::cli::commands::{arena, play};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe-ai")]
#[command(version, about = "Tic-tac-toe on 3x3, 5x5 and 9x9 boards with a minimax AI", long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play(play::PlayArgs),

    /// Run a round robin between difficulty levels
    Arena(arena::ArenaArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => play::execute(args),
        Commands::Arena(args) => arena::execute(args),
    }
}
