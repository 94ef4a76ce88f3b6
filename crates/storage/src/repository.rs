use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use quiz_core::model::{SavedSessionId, SessionSnapshot};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for abandoned-session snapshots.
///
/// Append-only plus explicit delete: no implicit eviction, no updates. The
/// store is a client-held log, not a source of truth with durability
/// guarantees of its own.
#[async_trait]
pub trait SavedSessionRepository: Send + Sync {
    /// Appends a snapshot to the log.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if a snapshot with the same id is
    /// already stored, or other storage errors.
    async fn append(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError>;

    /// Lists all stored snapshots in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log cannot be read.
    async fn list(&self) -> Result<Vec<SessionSnapshot>, StorageError>;

    /// Fetches a snapshot by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get(&self, id: SavedSessionId) -> Result<SessionSnapshot, StorageError>;

    /// Removes a snapshot by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn delete(&self, id: SavedSessionId) -> Result<(), StorageError>;
}

/// In-memory store for tests, prototyping, and hosts without persistence.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    saved: Arc<Mutex<Vec<SessionSnapshot>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SavedSessionRepository for InMemoryRepository {
    async fn append(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        let mut guard = self
            .saved
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.iter().any(|s| s.id == snapshot.id) {
            return Err(StorageError::Conflict);
        }
        guard.push(snapshot.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SessionSnapshot>, StorageError> {
        let guard = self
            .saved
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn get(&self, id: SavedSessionId) -> Result<SessionSnapshot, StorageError> {
        let guard = self
            .saved
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn delete(&self, id: SavedSessionId) -> Result<(), StorageError> {
        let mut guard = self
            .saved
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let before = guard.len();
        guard.retain(|s| s.id != id);
        if guard.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
