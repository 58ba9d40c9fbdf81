//! Win condition checking
//!
//! A move wins when it completes an unbroken run of five or more stones
//! of its color along any axis. Overlines (6+) also win; no gaps are bridged.

use crate::board::{Board, Pos, Stone};

use super::pattern::Direction;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Count contiguous stones of `color` from `pos` (exclusive) along `(dr, dc)`
#[inline]
fn run_length(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let mut k = 1;
    while let Some(next) = board.step(pos, dr, dc, k) {
        if board.get(next) != color {
            break;
        }
        count += 1;
        k += 1;
    }
    count
}

/// Five-in-a-row check through the stone at `pos`.
///
/// Only checks the 4 axes through the given position. Must be called on an
/// occupied cell; an empty cell never wins.
#[inline]
pub fn has_five(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if color == Stone::Empty {
        return false;
    }
    Direction::ALL.iter().any(|dir| {
        let (dr, dc) = dir.delta();
        let total =
            1 + run_length(board, pos, color, dr, dc) + run_length(board, pos, color, -dr, -dc);
        total >= WIN_LENGTH
    })
}

/// Stones of the winning run through `pos`, ordered along the axis.
///
/// Returns every stone of the run (5 or more) for the first axis that wins.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for dir in Direction::ALL {
        let (dr, dc) = dir.delta();
        let back = run_length(board, pos, color, -dr, -dc) as i32;
        let forward = run_length(board, pos, color, dr, dc) as i32;
        if (back + forward + 1) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .filter_map(|k| board.step(pos, dr, dc, k))
                .collect();
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn board_with(stones: &[(u8, u8)], stone: Stone) -> Board {
        let mut board = Board::new(BoardSize::Fifteen);
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), stone);
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(&[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)], Stone::Black);
        for col in 0..5 {
            assert!(has_five(&board, Pos::new(7, col)), "every stone of the run sees the five");
        }
        assert!(!has_five(&board, Pos::new(7, 5)));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(&[(3, 9), (4, 9), (5, 9), (6, 9), (7, 9)], Stone::White);
        assert!(has_five(&board, Pos::new(5, 9)));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let board = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Stone::White);
        assert!(has_five(&board, Pos::new(4, 4)));
    }

    #[test]
    fn test_anti_diagonal_five() {
        // Diagonal from (4, 8) to (8, 4)
        let stones: Vec<_> = (0..5).map(|i| (4 + i, 8 - i)).collect();
        let board = board_with(&stones, Stone::Black);
        assert!(has_five(&board, Pos::new(6, 6)));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let stones: Vec<_> = (0..6).map(|i| (7, 3 + i)).collect();
        let board = board_with(&stones, Stone::Black);
        assert!(has_five(&board, Pos::new(7, 5)));
        assert_eq!(winning_line(&board, Pos::new(7, 5)).map(|l| l.len()), Some(6));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(&[(7, 0), (7, 1), (7, 2), (7, 3)], Stone::Black);
        assert!(!has_five(&board, Pos::new(7, 3)));
        assert!(winning_line(&board, Pos::new(7, 3)).is_none());
    }

    #[test]
    fn test_gap_not_bridged() {
        // X X _ X X X
        let mut board = board_with(&[(7, 0), (7, 1), (7, 3), (7, 4), (7, 5)], Stone::Black);
        assert!(!has_five(&board, Pos::new(7, 3)));

        // Opponent stone also breaks the run
        board.place_stone(Pos::new(7, 2), Stone::White);
        assert!(!has_five(&board, Pos::new(7, 1)));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new(BoardSize::Thirteen);
        for i in 8..13 {
            board.place_stone(Pos::new(12, i), Stone::Black);
        }
        assert!(has_five(&board, Pos::new(12, 12)));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new(BoardSize::Nineteen);
        // Diagonal from (14, 14) to (18, 18)
        for i in 0..5 {
            board.place_stone(Pos::new(14 + i, 14 + i), Stone::White);
        }
        assert!(has_five(&board, Pos::new(18, 18)));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = board_with(&[(7, 0), (7, 1), (7, 3), (7, 4)], Stone::Black);
        // (7,2) would complete the five but is still empty
        assert!(!has_five(&board, Pos::new(7, 2)));
        assert!(winning_line(&board, Pos::new(7, 2)).is_none());
    }

    #[test]
    fn test_winning_line_order() {
        let board = board_with(&[(2, 6), (3, 5), (4, 4), (5, 3), (6, 2)], Stone::Black);
        let line = winning_line(&board, Pos::new(4, 4)).unwrap();
        assert_eq!(
            line,
            vec![
                Pos::new(2, 6),
                Pos::new(3, 5),
                Pos::new(4, 4),
                Pos::new(5, 3),
                Pos::new(6, 2),
            ]
        );
    }

    #[test]
    fn test_mixed_colors_no_win() {
        let mut board = board_with(&[(7, 0), (7, 1), (7, 2)], Stone::Black);
        board.place_stone(Pos::new(7, 3), Stone::White);
        board.place_stone(Pos::new(7, 4), Stone::White);
        assert!(!has_five(&board, Pos::new(7, 2)));
        assert!(!has_five(&board, Pos::new(7, 3)));
    }
}
