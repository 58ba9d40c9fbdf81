//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Largest supported board side (19x19)
pub const MAX_BOARD_SIZE: usize = 19;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 361

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stone {
    Empty,
    Black,
    White,
}

/// A side in the game. Black moves first outside the Swap2 opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Black,
    White,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Stone this player puts on the board
    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => f.write_str("black"),
            Player::White => f.write_str("white"),
        }
    }
}

/// Supported board sides. Fixed when a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoardSize {
    Thirteen,
    #[default]
    Fifteen,
    Seventeen,
    Nineteen,
}

impl BoardSize {
    pub const ALL: [BoardSize; 4] = [
        BoardSize::Thirteen,
        BoardSize::Fifteen,
        BoardSize::Seventeen,
        BoardSize::Nineteen,
    ];

    /// Number of cells along one side
    #[inline]
    pub fn side(self) -> u8 {
        match self {
            BoardSize::Thirteen => 13,
            BoardSize::Fifteen => 15,
            BoardSize::Seventeen => 17,
            BoardSize::Nineteen => 19,
        }
    }

    #[inline]
    pub fn cells(self) -> usize {
        self.side() as usize * self.side() as usize
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = ConfigError;

    fn try_from(side: u8) -> Result<Self, Self::Error> {
        BoardSize::ALL
            .into_iter()
            .find(|size| size.side() == side)
            .ok_or(ConfigError::UnsupportedBoardSize(side))
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> u8 {
        size.side()
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

/// Position on the board.
///
/// A `Pos` carries no board size; bounds are checked against the
/// [`Board`] it is used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board with the given side
    #[inline]
    pub fn to_index(self, side: u8) -> usize {
        self.row as usize * side as usize + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, side: u8) -> Self {
        Self {
            row: (idx / side as usize) as u8,
            col: (idx % side as usize) as u8,
        }
    }

    /// Check signed coordinates against a board side
    #[inline]
    pub fn is_valid(row: i32, col: i32, side: u8) -> bool {
        row >= 0 && row < side as i32 && col >= 0 && col < side as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Error parsing a `row,col` coordinate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate '{0}', expected row,col")]
pub struct PosParseError(pub String);

impl std::str::FromStr for Pos {
    type Err = PosParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| PosParseError(s.to_string()))?;
        let row = row.trim().parse().map_err(|_| PosParseError(s.to_string()))?;
        let col = col.trim().parse().map_err(|_| PosParseError(s.to_string()))?;
        Ok(Pos::new(row, col))
    }
}
