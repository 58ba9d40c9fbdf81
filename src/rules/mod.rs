//! Game rules for Gomoku
//!
//! This module implements the rule set shared by every variant:
//! - Line pattern scanning
//! - Win condition (5-in-a-row, overlines allowed)
//! - Forbidden moves for black under Pro rules (double-three, double-four)
//! - The move legality gate combining them

pub mod forbidden;
pub mod pattern;
pub mod validate;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{count_fours, count_threes, is_double_four, is_double_three, is_forbidden};
pub use pattern::{Direction, Pattern, PatternCell};
pub use validate::{check_move, is_valid_move, Illegal};
pub use win::{has_five, winning_line, WIN_LENGTH};
