//! Line geometry and fixed-window pattern matching
//!
//! A pattern is a short run of cells read along one of the four line axes.
//! Each offset compares the cell against a reference color:
//!
//! | symbol | cell        | matches when                                |
//! |--------|-------------|---------------------------------------------|
//! | `1`    | [`Same`]    | cell holds the reference color              |
//! | `0`    | [`Other`]   | cell is empty or holds the other color      |
//! | `2`    | [`Any`]     | always (but never off the board)            |
//!
//! Windows never wrap: a step that leaves the board fails the match.
//!
//! [`Same`]: PatternCell::Same
//! [`Other`]: PatternCell::Other
//! [`Any`]: PatternCell::Any

use crate::board::{Board, Pos, Stone};

/// The four line axes. The opposite sign of each is reached by negating
/// [`Direction::delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along a row (0, 1)
    Horizontal,
    /// Along a column (1, 0)
    Vertical,
    /// Down-right (1, 1)
    Diagonal,
    /// Down-left (1, -1)
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// `(d_row, d_col)` step vector
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Comparison applied at one pattern offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCell {
    Same,
    Other,
    Any,
}

impl PatternCell {
    #[inline]
    fn accepts(self, cell: Stone, color: Stone) -> bool {
        match self {
            PatternCell::Same => cell == color,
            PatternCell::Other => cell != color,
            PatternCell::Any => true,
        }
    }
}

/// A fixed-length line pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [PatternCell],
}

impl Pattern {
    pub const fn new(name: &'static str, cells: &'static [PatternCell]) -> Self {
        Self { name, cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Offsets that must hold the reference color
    pub fn anchors(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == PatternCell::Same)
            .map(|(offset, _)| offset)
    }

    /// Notation used in the rule books: `1` same, `0` other, `2` any
    pub fn notation(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                PatternCell::Same => '1',
                PatternCell::Other => '0',
                PatternCell::Any => '2',
            })
            .collect()
    }
}

/// Test the window starting at `start` and stepping along `dir` against
/// `pattern`, comparing cells with `color`.
pub fn matches(
    board: &Board,
    start: Pos,
    dir: Direction,
    pattern: &Pattern,
    color: Stone,
) -> bool {
    let (dr, dc) = dir.delta();
    pattern.cells.iter().enumerate().all(|(offset, cell)| {
        match board.step(start, dr, dc, offset as i32) {
            Some(pos) => cell.accepts(board.get(pos), color),
            None => false,
        }
    })
}

/// Check whether some window along `dir` that puts `pos` on one of the
/// pattern's `Same` offsets matches.
pub fn matches_through(
    board: &Board,
    pos: Pos,
    dir: Direction,
    pattern: &Pattern,
    color: Stone,
) -> bool {
    let (dr, dc) = dir.delta();
    pattern.anchors().any(|anchor| {
        board
            .step(pos, -dr, -dc, anchor as i32)
            .is_some_and(|start| matches(board, start, dir, pattern, color))
    })
}
