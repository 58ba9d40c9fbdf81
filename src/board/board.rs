//! Board structure sized at creation

use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::{BoardSize, Pos, Stone};
use crate::error::BoardError;

/// Game board: one bitboard per color.
///
/// Cells only ever go from empty to occupied; there is no removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    size: BoardSize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

/// Unchecked serialized form of [`Board`]
#[derive(Deserialize)]
struct BoardSnapshot {
    size: BoardSize,
    black: Bitboard,
    white: Bitboard,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = BoardError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let BoardSnapshot { size, black, white } = snapshot;

        // Bounds first: `Bitboard::get` expects in-range indices
        let cells = size.cells();
        if let Some(idx) = black.union(&white).iter_ones().find(|&idx| idx >= cells) {
            return Err(BoardError::StoneOffBoard(idx));
        }
        if let Some(idx) = black.iter_ones().find(|&idx| white.get(idx)) {
            return Err(BoardError::OverlappingStones(idx));
        }

        Ok(Board { size, black, white })
    }
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Cells along one side
    #[inline]
    pub fn side(&self) -> u8 {
        self.size.side()
    }

    /// Check if position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.side() && pos.col < self.side()
    }

    /// Position `k` steps from `pos` along `(dr, dc)`, or `None` off the board
    #[inline]
    pub fn step(&self, pos: Pos, dr: i32, dc: i32, k: i32) -> Option<Pos> {
        let r = pos.row as i32 + dr * k;
        let c = pos.col as i32 + dc * k;
        if Pos::is_valid(r, c, self.side()) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Get stone at position. Off-board positions read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if !self.contains(pos) {
            return Stone::Empty;
        }
        let idx = pos.to_index(self.side());
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.get(pos) == Stone::Empty
    }

    /// Place a stone. Callers check legality first; placing `Stone::Empty`,
    /// off the board, or on an occupied cell does nothing.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        if !self.is_empty(pos) {
            return;
        }
        let idx = pos.to_index(self.side());
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size.cells()
    }

    /// Positions holding the given stone, in row-major order
    pub fn positions(&self, stone: Stone) -> Vec<Pos> {
        let side = self.side();
        let bits = match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
            Stone::Empty => {
                return self.empty_positions();
            }
        };
        bits.iter_ones().map(|idx| Pos::from_index(idx, side)).collect()
    }

    fn empty_positions(&self) -> Vec<Pos> {
        let side = self.side();
        let occupied = self.black.union(&self.white);
        (0..self.size.cells())
            .filter(|&idx| !occupied.get(idx))
            .map(|idx| Pos::from_index(idx, side))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

/// Plain-text grid: `X` black, `O` white, `.` empty, with row and column labels
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = self.side();
        write!(f, "   ")?;
        for col in 0..side {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        for row in 0..side {
            write!(f, "{:>3}", row)?;
            for col in 0..side {
                let ch = match self.get(Pos::new(row, col)) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
