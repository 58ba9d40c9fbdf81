//! Command-line interface for the gomoku rule engine.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gomoku::{Pos, Variant};

/// Gomoku - replay and check moves under the supported rule variants
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Gomoku rule engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay moves and print the resulting position
    Play {
        #[command(flatten)]
        game: GameArgs,

        /// Print the session as JSON instead of a board diagram
        #[arg(long)]
        json: bool,
    },

    /// Replay moves, then check whether a cell is a legal next move
    Check {
        #[command(flatten)]
        game: GameArgs,

        /// Cell to check, as row,col
        #[arg(long)]
        at: Pos,
    },
}

/// Options shared by every command
#[derive(Args, Debug)]
pub struct GameArgs {
    /// TOML file with `variant` and `board_size`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rule variant (standard, swap2, renju, freestyle, pro)
    #[arg(short, long)]
    pub variant: Option<Variant>,

    /// Board side (13, 15, 17 or 19)
    #[arg(short, long)]
    pub size: Option<u8>,

    /// Moves in play order, each as row,col
    pub moves: Vec<Pos>,
}
