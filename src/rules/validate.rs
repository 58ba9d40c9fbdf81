//! Move legality gate

use crate::board::{Board, Player, Pos};
use crate::game::Variant;

use super::forbidden::is_forbidden;

/// Why a move is not legal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Illegal {
    OffBoard,
    Occupied,
    /// Double-three or double-four for black under Pro rules
    Forbidden,
}

/// Check a move and report why it is illegal
pub fn check_move(board: &Board, pos: Pos, variant: Variant, mover: Player) -> Result<(), Illegal> {
    if !board.contains(pos) {
        return Err(Illegal::OffBoard);
    }

    if !board.is_empty(pos) {
        return Err(Illegal::Occupied);
    }

    if variant.enforces_forbidden_moves()
        && mover == Player::Black
        && is_forbidden(board, pos, mover.stone())
    {
        return Err(Illegal::Forbidden);
    }

    Ok(())
}

/// Check if a move is valid
///
/// A move is valid if:
/// 1. The position is on the board and empty
/// 2. Under Pro rules, black does not form a double-three or double-four
pub fn is_valid_move(board: &Board, pos: Pos, variant: Variant, mover: Player) -> bool {
    check_move(board, pos, variant, mover).is_ok()
}
