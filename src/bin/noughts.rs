//! Noughts CLI - Tic-Tac-Toe engine front end
//!
//! This CLI provides a unified interface for:
//! - Asking the engine for a move on any board
//! - Playing interactive matches at three difficulty levels
//! - Running series between engine and random agents
//! - Verifying the pruned search against exhaustive minimax

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use noughts::cli::{commands, config::FileConfig};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Unbeatable Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file; command-line flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the engine's move and score table for a board
    BestMove(commands::best_move::BestMoveArgs),

    /// Play an interactive match against the engine
    Play(commands::play::PlayArgs),

    /// Play a series of games between two agents
    Series(commands::series::SeriesArgs),

    /// Check pruned search against exhaustive minimax
    Verify(commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => FileConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FileConfig::default(),
    };

    match cli.command {
        Commands::BestMove(args) => commands::best_move::execute(args, &config),
        Commands::Play(args) => commands::play::execute(args, &config),
        Commands::Series(args) => commands::series::execute(args, &config),
        Commands::Verify(args) => commands::verify::execute(args, &config),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
