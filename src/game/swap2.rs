//! Swap2 opening protocol
//!
//! ```text
//!   Placing (0..=2 stones) --3rd black stone--> Deciding --white stone--> Finished
//!                                                  |                        ^
//!                                                  +--choose(KeepColors)----+
//!                                                  +--choose(SwapColors)----+
//! ```
//!
//! The first three opening stones are always black. White then either plays
//! a stone straight away, which ends the opening with black to move, or makes
//! an explicit choice that ends the opening and hands white the move.

use serde::{Deserialize, Serialize};

use crate::board::{Player, Pos};
use crate::error::Swap2Error;

/// Opening stones placed before white decides
pub const OPENING_STONES: usize = 3;

/// White's explicit decision after the three opening stones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Swap2Choice {
    /// Seats keep their colors
    KeepColors,
    /// The seats exchange colors
    SwapColors,
}

/// Opening state carried by a Swap2 session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Swap2Opening {
    Placing { stones: Vec<Pos> },
    Deciding { stones: Vec<Pos> },
    Finished { colors_swapped: bool },
}

impl Default for Swap2Opening {
    fn default() -> Self {
        Swap2Opening::Placing {
            stones: Vec::with_capacity(OPENING_STONES),
        }
    }
}

impl Swap2Opening {
    /// Opening still running
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, Swap2Opening::Finished { .. })
    }

    /// Opening stones placed so far; empty once the opening is over
    pub fn stones(&self) -> &[Pos] {
        match self {
            Swap2Opening::Placing { stones } | Swap2Opening::Deciding { stones } => stones,
            Swap2Opening::Finished { .. } => &[],
        }
    }

    pub fn colors_swapped(&self) -> bool {
        matches!(self, Swap2Opening::Finished { colors_swapped: true })
    }

    /// Color of the next opening stone, `None` once finished
    pub fn next_stone(&self) -> Option<Player> {
        match self {
            Swap2Opening::Placing { .. } => Some(Player::Black),
            Swap2Opening::Deciding { .. } => Some(Player::White),
            Swap2Opening::Finished { .. } => None,
        }
    }

    /// Record an opening stone at `pos`; returns the player to move next.
    pub(crate) fn record(&mut self, pos: Pos) -> Option<Player> {
        match self {
            Swap2Opening::Placing { stones } => {
                stones.push(pos);
                if stones.len() < OPENING_STONES {
                    return Some(Player::Black);
                }
                let stones = std::mem::take(stones);
                *self = Swap2Opening::Deciding { stones };
                Some(Player::White)
            }
            Swap2Opening::Deciding { .. } => {
                *self = Swap2Opening::Finished {
                    colors_swapped: false,
                };
                Some(Player::Black)
            }
            Swap2Opening::Finished { .. } => None,
        }
    }

    /// Apply white's explicit choice; returns the player to move next.
    pub(crate) fn choose(&mut self, choice: Swap2Choice) -> Result<Player, Swap2Error> {
        if !matches!(self, Swap2Opening::Deciding { .. }) {
            return Err(Swap2Error::NotDeciding);
        }
        *self = Swap2Opening::Finished {
            colors_swapped: choice == Swap2Choice::SwapColors,
        };
        Ok(Player::White)
    }
}
