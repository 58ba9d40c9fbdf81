//! Game sessions: variants, the Swap2 opening, and move application

pub mod session;
pub mod swap2;
pub mod variant;

#[cfg(test)]
mod tests;

pub use session::{GameSession, MoveOutcome, Rejection, Rules, Status};
pub use swap2::{Swap2Choice, Swap2Opening, OPENING_STONES};
pub use variant::Variant;
