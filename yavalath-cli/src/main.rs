//! Yavalath CLI - Command-line interface
//!
//! Commands:
//! - play: Play a hot-seat game from stdin
//! - board: Print board geometry
//! - serve: Start visualizer server

mod board_cmd;
mod play_cmd;
mod render;
mod server;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use yavalath_core::DisplayConfig;

#[derive(Parser)]
#[command(name = "yavalath")]
#[command(about = "Yavalath: four in a row wins, three in a row loses")]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a hot-seat game, one move per stdin line
    Play(play_cmd::PlayArgs),
    /// Print every cell with its pixel center
    Board(board_cmd::BoardArgs),
    /// Start visualizer server
    Serve(server::ServerArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Board(args) => board_cmd::run(args),
        Commands::Serve(args) => server::run(args),
    }
}

/// Log to stderr so stdout carries only game output
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Display config from a JSON file, or the defaults
pub(crate) fn load_display_config(path: Option<&Path>) -> Result<DisplayConfig> {
    match path {
        Some(path) => DisplayConfig::load(path)
            .with_context(|| format!("Failed to load display config: {}", path.display())),
        None => Ok(DisplayConfig::default()),
    }
}
