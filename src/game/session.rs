//! Game session: the aggregate the rule engine mutates
//!
//! A session owns the board, whose turn it is, the outcome, and the move
//! history. It changes only through [`GameSession::play`] (or the pure
//! [`GameSession::make_move`]) and, for Swap2, [`GameSession::choose_swap2`].
//! All state is plain data so sessions can be stored as JSON.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Board, BoardSize, Player, Pos};
use crate::config::GameConfig;
use crate::error::{ConfigError, ReplayError, Swap2Error};
use crate::rules::{check_move, has_five, winning_line, Illegal};

use super::swap2::{Swap2Choice, Swap2Opening};
use super::variant::Variant;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Completed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => f.write_str("in_progress"),
            Status::Completed => f.write_str("completed"),
        }
    }
}

/// Variant together with the state only that variant carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum Rules {
    Standard,
    Swap2 { opening: Swap2Opening },
    Renju,
    Freestyle,
    Pro,
}

impl Rules {
    pub fn new(variant: Variant) -> Self {
        match variant {
            Variant::Standard => Rules::Standard,
            Variant::Swap2 => Rules::Swap2 {
                opening: Swap2Opening::default(),
            },
            Variant::Renju => Rules::Renju,
            Variant::Freestyle => Rules::Freestyle,
            Variant::Pro => Rules::Pro,
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Rules::Standard => Variant::Standard,
            Rules::Swap2 { .. } => Variant::Swap2,
            Rules::Renju => Variant::Renju,
            Rules::Freestyle => Variant::Freestyle,
            Rules::Pro => Variant::Pro,
        }
    }
}

/// Why `play` left the session untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    GameOver,
    Illegal(Illegal),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::GameOver => f.write_str("game is over"),
            Rejection::Illegal(Illegal::OffBoard) => f.write_str("cell is off the board"),
            Rejection::Illegal(Illegal::Occupied) => f.write_str("cell is occupied"),
            Rejection::Illegal(Illegal::Forbidden) => {
                f.write_str("double-three or double-four is forbidden for black")
            }
        }
    }
}

/// What a call to [`GameSession::play`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed
    Rejected(Rejection),
    /// Swap2 opening stone of the given color
    Opening(Player),
    /// Stone placed, turn passed
    Placed,
    Won(Player),
    /// Last empty cell filled without a win
    Draw,
}

impl MoveOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Gomoku game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    status: Status,
    winner: Option<Player>,
    rules: Rules,
    move_history: Vec<Pos>,
}

impl GameSession {
    /// Empty board, black to move
    #[instrument]
    pub fn new(variant: Variant, board_size: BoardSize) -> Self {
        debug!("Creating session");
        Self {
            board: Board::new(board_size),
            current_player: Player::Black,
            status: Status::InProgress,
            winner: None,
            rules: Rules::new(variant),
            move_history: Vec::with_capacity(board_size.cells()),
        }
    }

    /// Create from a raw side length, rejecting unsupported sizes
    pub fn with_side(variant: Variant, side: u8) -> Result<Self, ConfigError> {
        let size = BoardSize::try_from(side)?;
        Ok(Self::new(variant, size))
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.variant, config.board_size)
    }

    /// Rebuild a session by playing `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] naming the first move the rules reject.
    pub fn replay(
        variant: Variant,
        board_size: BoardSize,
        moves: &[Pos],
    ) -> Result<Self, ReplayError> {
        let mut session = Self::new(variant, board_size);
        for (index, &pos) in moves.iter().enumerate() {
            if let MoveOutcome::Rejected(reason) = session.play(pos) {
                return Err(ReplayError { index, pos, reason });
            }
        }
        Ok(session)
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Set only once the session is completed with a five
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn variant(&self) -> Variant {
        self.rules.variant()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn board_size(&self) -> BoardSize {
        self.board.size()
    }

    /// Non-opening moves in the order they were played
    pub fn move_history(&self) -> &[Pos] {
        &self.move_history
    }

    /// `true` while the Swap2 opening runs; always `false` for other variants
    pub fn is_swap2_phase(&self) -> bool {
        match &self.rules {
            Rules::Swap2 { opening } => opening.is_active(),
            _ => false,
        }
    }

    /// Opening stones placed so far (Swap2 only)
    pub fn swap2_moves(&self) -> &[Pos] {
        match &self.rules {
            Rules::Swap2 { opening } => opening.stones(),
            _ => &[],
        }
    }

    /// Whether white chose to exchange colors at the end of the Swap2 opening
    pub fn colors_swapped(&self) -> bool {
        match &self.rules {
            Rules::Swap2 { opening } => opening.colors_swapped(),
            _ => false,
        }
    }

    /// Stones of the winning run, for highlighting
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        self.winner?;
        let last = *self.move_history.last()?;
        winning_line(&self.board, last)
    }

    // ─────────────────────────────────────────────────────────────
    //  Rules
    // ─────────────────────────────────────────────────────────────

    /// Check if the current player may place a stone at `pos`.
    ///
    /// Only the board and variant are consulted; a completed session still
    /// answers, but [`GameSession::play`] ignores every move once it is over.
    pub fn is_valid_move(&self, pos: Pos) -> bool {
        check_move(&self.board, pos, self.variant(), self.current_player).is_ok()
    }

    /// Every cell the current player may play, in row-major order
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.board
            .positions(crate::board::Stone::Empty)
            .into_iter()
            .filter(|&pos| self.is_valid_move(pos))
            .collect()
    }

    /// Apply a move and return the resulting session; `self` is untouched.
    ///
    /// A rejected move yields a session equal to `self`.
    pub fn make_move(&self, pos: Pos) -> GameSession {
        let mut next = self.clone();
        next.play(pos);
        next
    }

    /// Apply a move in place and report what happened.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, pos: Pos) -> MoveOutcome {
        if self.status == Status::Completed {
            debug!("Move ignored, game is over");
            return MoveOutcome::Rejected(Rejection::GameOver);
        }

        if let Err(reason) = check_move(&self.board, pos, self.variant(), self.current_player) {
            debug!(?reason, "Move rejected");
            return MoveOutcome::Rejected(Rejection::Illegal(reason));
        }

        // Opening stones skip history and win detection
        if let Rules::Swap2 { opening } = &mut self.rules {
            if let Some(stone) = opening.next_stone() {
                self.board.place_stone(pos, stone.stone());
                if let Some(next) = opening.record(pos) {
                    self.current_player = next;
                }
                debug!(
                    %stone,
                    placed = opening.stones().len(),
                    active = opening.is_active(),
                    "Swap2 opening stone"
                );
                return MoveOutcome::Opening(stone);
            }
        }

        let mover = self.current_player;
        self.board.place_stone(pos, mover.stone());
        self.move_history.push(pos);

        if has_five(&self.board, pos) {
            self.status = Status::Completed;
            self.winner = Some(mover);
            info!(winner = %mover, moves = self.move_history.len(), "Game won");
            return MoveOutcome::Won(mover);
        }

        if self.board.is_full() {
            self.status = Status::Completed;
            info!(moves = self.move_history.len(), "Game drawn, board full");
            return MoveOutcome::Draw;
        }

        self.current_player = mover.opponent();
        debug!(next = %self.current_player, "Move placed");
        MoveOutcome::Placed
    }

    /// Resolve white's Swap2 decision explicitly. White moves next either way.
    ///
    /// # Errors
    ///
    /// [`Swap2Error::NotSwap2`] for other variants, [`Swap2Error::NotDeciding`]
    /// before the third opening stone or after the opening ended.
    #[instrument(skip(self))]
    pub fn choose_swap2(&mut self, choice: Swap2Choice) -> Result<(), Swap2Error> {
        let Rules::Swap2 { opening } = &mut self.rules else {
            return Err(Swap2Error::NotSwap2);
        };
        self.current_player = opening.choose(choice)?;
        info!(?choice, "Swap2 opening decided");
        Ok(())
    }
}
