//! Tic-tac-toe CLI
//!
//! This CLI provides a unified interface for:
//! - Playing interactive games at the terminal
//! - Classifying board positions as won, drawn, or in progress

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe at the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game at the terminal
    Play(tictactoe::cli::commands::play::PlayArgs),

    /// Classify a board position
    Evaluate(tictactoe::cli::commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => tictactoe::cli::commands::play::execute(args),
        Commands::Evaluate(args) => tictactoe::cli::commands::evaluate::execute(args),
    }
}
