use std::sync::Arc;

use quiz_core::model::{Category, SavedSessionId, SessionSnapshot};
use quiz_core::Clock;
use storage::repository::SavedSessionRepository;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::session::QuizSession;

/// Couples the synchronous session state machine to the saved-session store.
///
/// The state machine never suspends; this layer is async only at the
/// persistence boundary, when snapshots are appended, loaded, or deleted.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    saved: Arc<dyn SavedSessionRepository>,
    config: SessionConfig,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, saved: Arc<dyn SavedSessionRepository>) -> Self {
        Self {
            clock,
            saved,
            config: SessionConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Starts a fresh session over `category` under this service's rules.
    #[must_use]
    pub fn start_session(&self, category: Category) -> QuizSession {
        let mut session = QuizSession::new(self.config.clone());
        session.start(category);
        session
    }

    /// Abandons the session, persisting its snapshot for later resume.
    ///
    /// Returns `None` (and stores nothing) when the session is not active.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the snapshot cannot be appended;
    /// the session is still marked abandoned in that case.
    pub async fn abandon_session(
        &self,
        session: &mut QuizSession,
    ) -> Result<Option<SavedSessionId>, SessionError> {
        let Some(snapshot) = session.abandon(self.clock.now()) else {
            return Ok(None);
        };
        let id = snapshot.id;
        self.saved.append(&snapshot).await?;
        Ok(Some(id))
    }

    /// Resumes a stored snapshot, consuming it from the store.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the snapshot is missing or cannot
    /// be removed, and rehydration errors if `category` does not match.
    pub async fn resume_session(
        &self,
        category: Category,
        id: SavedSessionId,
    ) -> Result<QuizSession, SessionError> {
        let snapshot = self.saved.get(id).await?;
        let mut session = QuizSession::new(self.config.clone());
        session.resume(category, snapshot)?;
        self.saved.delete(id).await?;
        Ok(session)
    }

    /// All stored snapshots, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the store cannot be read.
    pub async fn saved_sessions(&self) -> Result<Vec<SessionSnapshot>, SessionError> {
        Ok(self.saved.list().await?)
    }

    /// Removes a stored snapshot without resuming it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the snapshot is missing or the
    /// store fails.
    pub async fn delete_saved(&self, id: SavedSessionId) -> Result<(), SessionError> {
        Ok(self.saved.delete(id).await?)
    }
}
