//! Gomoku rule engine
//!
//! Validates and applies moves for five-in-a-row on square boards of side
//! 13, 15, 17 or 19 under these variants:
//! - Standard and Freestyle: five or more in a row wins
//! - Renju: same placement rules as Standard
//! - Swap2: three black opening stones, then white decides
//! - Pro: double-three and double-four are forbidden for black
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Pattern scanning, win detection, forbidden moves, legality
//! - [`game`]: Game sessions, variants, and the Swap2 opening
//! - [`store`]: Session persistence contract with an in-memory store
//! - [`config`]: TOML game configuration
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{BoardSize, GameSession, Pos, Status, Variant};
//!
//! let mut session = GameSession::new(Variant::Standard, BoardSize::Fifteen);
//! for (row, col) in [(7, 3), (0, 0), (7, 4), (0, 2), (7, 5), (0, 4), (7, 6), (0, 6), (7, 7)] {
//!     session.play(Pos::new(row, col));
//! }
//! assert_eq!(session.status(), Status::Completed);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod store;

// Re-export commonly used types for convenience
pub use board::{Board, BoardSize, Player, Pos, Stone};
pub use config::GameConfig;
pub use error::{BoardError, ConfigError, ReplayError, StoreError, Swap2Error};
pub use game::{GameSession, MoveOutcome, Rejection, Status, Swap2Choice, Variant};
pub use store::{MemoryStore, SessionId, SessionStore, StoredSession};
