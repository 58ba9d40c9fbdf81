//! Session persistence
//!
//! The rule engine never touches storage itself. Callers load the active
//! session for an owner, apply moves, and save the full snapshot back.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::game::{GameSession, Status};

/// Store-assigned session key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A session together with its ownership record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub id: SessionId,
    pub owner: String,
    pub game_type: String,
    /// Superseded by a newer session of the same owner and game type
    pub archived: bool,
    /// Store-wide write counter at the last create or save
    pub updated: u64,
    pub session: GameSession,
}

impl StoredSession {
    /// Still playable and not superseded
    pub fn is_active(&self) -> bool {
        !self.archived && self.session.status() == Status::InProgress
    }
}

/// Persistence collaborator for game sessions
pub trait SessionStore {
    /// Most recently updated in-progress session for `owner` and `game_type`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn load_active(
        &self,
        owner: &str,
        game_type: &str,
    ) -> Result<Option<StoredSession>, StoreError>;

    /// Store a new session, archiving the owner's in-progress sessions of the
    /// same game type.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn create(
        &mut self,
        owner: &str,
        game_type: &str,
        session: GameSession,
    ) -> Result<SessionId, StoreError>;

    /// Replace the snapshot of an existing session.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown id, [`StoreError::OwnerMismatch`]
    /// if the session belongs to someone else.
    fn save(
        &mut self,
        owner: &str,
        id: SessionId,
        session: &GameSession,
    ) -> Result<(), StoreError>;
}

/// In-memory [`SessionStore`] that can be snapshotted as JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    records: Vec<StoredSession>,
    next_id: u64,
    clock: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: SessionId) -> Option<&StoredSession> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Every session of `owner`, archived ones included, oldest first
    pub fn sessions_of<'a>(
        &'a self,
        owner: &'a str,
    ) -> impl Iterator<Item = &'a StoredSession> + 'a {
        self.records.iter().filter(move |r| r.owner == owner)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] for malformed input.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let store: Self = serde_json::from_str(json)?;
        debug!(sessions = store.records.len(), "Store restored");
        Ok(store)
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

impl SessionStore for MemoryStore {
    #[instrument(skip(self))]
    fn load_active(
        &self,
        owner: &str,
        game_type: &str,
    ) -> Result<Option<StoredSession>, StoreError> {
        let found = self
            .records
            .iter()
            .filter(|r| r.owner == owner && r.game_type == game_type && r.is_active())
            .max_by_key(|r| r.updated)
            .cloned();

        match &found {
            Some(record) => debug!(id = %record.id, "Active session found"),
            None => debug!("No active session"),
        }
        Ok(found)
    }

    #[instrument(skip(self, session), fields(variant = %session.variant()))]
    fn create(
        &mut self,
        owner: &str,
        game_type: &str,
        session: GameSession,
    ) -> Result<SessionId, StoreError> {
        let mut superseded = 0;
        for record in &mut self.records {
            if record.owner == owner && record.game_type == game_type && record.is_active() {
                record.archived = true;
                superseded += 1;
            }
        }
        if superseded > 0 {
            debug!(superseded, "Archived previous sessions");
        }

        self.next_id += 1;
        let id = SessionId(self.next_id);
        let updated = self.tick();
        self.records.push(StoredSession {
            id,
            owner: owner.to_string(),
            game_type: game_type.to_string(),
            archived: false,
            updated,
            session,
        });

        info!(%id, "Session created");
        Ok(id)
    }

    #[instrument(skip(self, session), fields(status = %session.status()))]
    fn save(
        &mut self,
        owner: &str,
        id: SessionId,
        session: &GameSession,
    ) -> Result<(), StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if self.records[index].owner != owner {
            return Err(StoreError::OwnerMismatch {
                id,
                owner: owner.to_string(),
            });
        }

        let updated = self.tick();
        let record = &mut self.records[index];
        record.session = session.clone();
        record.updated = updated;
        info!(moves = session.move_history().len(), "Session saved");
        Ok(())
    }
}
