//! Gomoku rule engine CLI
//!
//! Replays a move list under a chosen variant and reports the result.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use gomoku::{BoardSize, GameConfig, GameSession, Status};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game, json } => run_play(&game, json),
        Command::Check { game, at } => {
            let session = replay(&game)?;
            let legal = session.is_valid_move(at);
            println!(
                "{at}: {} for {}",
                if legal { "legal" } else { "illegal" },
                session.current_player()
            );
            Ok(())
        }
    }
}

fn run_play(game: &GameArgs, json: bool) -> Result<()> {
    let session = replay(game)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    print!("{}", session.board());
    println!("variant: {}", session.variant());
    if session.is_swap2_phase() {
        println!("swap2 opening: {} stones placed", session.swap2_moves().len());
    }
    match (session.status(), session.winner()) {
        (Status::InProgress, _) => {
            println!("status: in_progress, {} to move", session.current_player())
        }
        (Status::Completed, Some(winner)) => println!("status: completed, {winner} wins"),
        (Status::Completed, None) => println!("status: completed, draw"),
    }
    Ok(())
}

/// Build the config from file and flags, then replay the moves
#[instrument(skip(game), fields(moves = game.moves.len()))]
fn replay(game: &GameArgs) -> Result<GameSession> {
    let base = match &game.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let size = game.size.map(BoardSize::try_from).transpose()?;
    let config = base.with_overrides(game.variant, size);
    debug!(?config, "Resolved game config");

    GameSession::replay(config.variant, config.board_size, &game.moves)
        .context("failed to replay moves")
}
