//! Error types
//!
//! Illegal moves are not errors: the validator answers with `bool` and
//! move application reports a [`crate::game::MoveOutcome`]. The types here
//! cover configuration, board snapshots, the Swap2 decision, and the
//! session store.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Pos;
use crate::game::Rejection;
use crate::store::SessionId;

/// Rejected game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Board side other than 13, 15, 17 or 19
    #[error("unsupported board size {0}, expected one of 13, 15, 17, 19")]
    UnsupportedBoardSize(u8),

    #[error("unknown variant '{0}', expected standard, swap2, renju, freestyle or pro")]
    UnknownVariant(String),

    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Board snapshot that no sequence of moves could produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("stone at cell {0} lies outside the board")]
    StoneOffBoard(usize),

    #[error("cell {0} holds both colors")]
    OverlappingStones(usize),
}

/// Swap2 decision made at the wrong time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Swap2Error {
    #[error("session does not use the swap2 opening")]
    NotSwap2,

    #[error("swap2 decision is only possible after the third opening stone")]
    NotDeciding,
}

/// A recorded move list that the rules do not accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("move {} at {pos} rejected: {reason}", .index + 1)]
pub struct ReplayError {
    /// Zero-based position in the move list
    pub index: usize,
    pub pos: Pos,
    pub reason: Rejection,
}

/// Session store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session {0} not found")]
    NotFound(SessionId),

    #[error("session {id} does not belong to owner '{owner}'")]
    OwnerMismatch { id: SessionId, owner: String },

    #[error("failed to serialize store: {0}")]
    Serialization(#[from] serde_json::Error),
}
