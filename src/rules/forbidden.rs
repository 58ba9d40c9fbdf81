//! Double-three and double-four forbidden moves (Pro variant)
//!
//! Black may not place a stone that simultaneously forms two or more
//! threes, or two or more fours. Shapes are matched with the fixed pattern
//! libraries below on a copy of the board where the candidate cell already
//! holds the mover's stone.
//!
//! Each axis through the candidate contributes at most one three and one
//! four, however many library patterns fit along it. A move that completes
//! five in a row is never forbidden.

use crate::board::{Board, Pos, Stone};

use super::pattern::PatternCell::{Any, Other, Same};
use super::pattern::{matches_through, Direction, Pattern};
use super::win::has_five;

/// `01110`, `011010`, `010110`
pub const THREE_PATTERNS: [Pattern; 3] = [
    Pattern::new("open three", &[Other, Same, Same, Same, Other]),
    Pattern::new("split three", &[Other, Same, Same, Other, Same, Other]),
    Pattern::new("split three (mirrored)", &[Other, Same, Other, Same, Same, Other]),
];

/// `011110`, `011112`, `211110`
pub const FOUR_PATTERNS: [Pattern; 3] = [
    Pattern::new("open four", &[Other, Same, Same, Same, Same, Other]),
    Pattern::new("four open left", &[Other, Same, Same, Same, Same, Any]),
    Pattern::new("four open right", &[Any, Same, Same, Same, Same, Other]),
];

/// Matches needed from one library to forbid the move
const FORBIDDEN_COUNT: u8 = 2;

/// Count the axes through `pos` where some pattern of the library matches,
/// stopping at `limit`
fn count_library(board: &Board, pos: Pos, stone: Stone, library: &[Pattern], limit: u8) -> u8 {
    let mut count = 0;
    for dir in Direction::ALL {
        if library
            .iter()
            .any(|pattern| matches_through(board, pos, dir, pattern, stone))
        {
            count += 1;
            // Early exit: forbidding only needs `limit` axes
            if count >= limit {
                return count;
            }
        }
    }
    count
}

/// Board copy with the candidate stone placed
#[inline]
fn with_candidate(board: &Board, pos: Pos, stone: Stone) -> Board {
    let mut probe = board.clone();
    probe.place_stone(pos, stone);
    probe
}

/// Number of three shapes placing `stone` at `pos` would form (capped at 2)
pub fn count_threes(board: &Board, pos: Pos, stone: Stone) -> u8 {
    let probe = with_candidate(board, pos, stone);
    count_library(&probe, pos, stone, &THREE_PATTERNS, FORBIDDEN_COUNT)
}

/// Number of four shapes placing `stone` at `pos` would form (capped at 2)
pub fn count_fours(board: &Board, pos: Pos, stone: Stone) -> u8 {
    let probe = with_candidate(board, pos, stone);
    count_library(&probe, pos, stone, &FOUR_PATTERNS, FORBIDDEN_COUNT)
}

/// Check if placing `stone` at `pos` forms two or more threes
pub fn is_double_three(board: &Board, pos: Pos, stone: Stone) -> bool {
    count_threes(board, pos, stone) >= FORBIDDEN_COUNT
}

/// Check if placing `stone` at `pos` forms two or more fours
pub fn is_double_four(board: &Board, pos: Pos, stone: Stone) -> bool {
    count_fours(board, pos, stone) >= FORBIDDEN_COUNT
}

/// Check if the move is a forbidden double-three or double-four.
///
/// A move that makes five wins outright and is never forbidden.
/// `pos` must be empty; callers establish this before asking.
pub fn is_forbidden(board: &Board, pos: Pos, stone: Stone) -> bool {
    let probe = with_candidate(board, pos, stone);
    if has_five(&probe, pos) {
        return false;
    }
    count_library(&probe, pos, stone, &THREE_PATTERNS, FORBIDDEN_COUNT) >= FORBIDDEN_COUNT
        || count_library(&probe, pos, stone, &FOUR_PATTERNS, FORBIDDEN_COUNT) >= FORBIDDEN_COUNT
}
