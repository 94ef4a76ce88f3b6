use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

use quiz_core::matching::match_guess;
use quiz_core::model::{
    Category, FoundItem, ItemId, QuizItem, SavedSessionId, SessionSnapshot, ITEMS_PER_CATEGORY,
    MAX_HINTS_PER_ITEM,
};
use quiz_core::scoring::{points_for_attempt, MAX_SESSION_SCORE};

use crate::config::SessionConfig;
use crate::error::SessionError;

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Active,
    Completed,
    Exhausted,
    Abandoned,
}

impl SessionStatus {
    /// True for states a live session cannot leave except through `reset`
    /// or a fresh `start`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionStatus::Completed | SessionStatus::Exhausted | SessionStatus::Abandoned
        )
    }
}

//
// ─── GUESS RESULT ──────────────────────────────────────────────────────────────
//

/// Feedback for a single submission, for the caller to render.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessResult {
    pub correct: bool,
    pub item: Option<QuizItem>,
    pub points: u32,
    pub explanation: Option<String>,
}

impl GuessResult {
    /// Neutral result for wrong guesses and out-of-turn calls.
    #[must_use]
    pub fn miss() -> Self {
        Self {
            correct: false,
            item: None,
            points: 0,
            explanation: None,
        }
    }
}

/// Read-only projection of the live session for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub status: SessionStatus,
    pub category_title: Option<String>,
    pub score: u32,
    pub max_score: u32,
    pub attempts: u32,
    pub attempt_cap: u32,
    pub found: Vec<FoundItem>,
    pub remaining: usize,
    pub pending_explanation: Option<String>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The live quiz session: one category, ten items, a degressive score.
///
/// All mutation goes through the methods here; callers render from
/// accessors or `view()` and never write fields. Operations called in a
/// state where they have no meaning are silent no-ops returning neutral
/// values, so the host may invoke the engine speculatively.
#[derive(Debug, Clone)]
pub struct QuizSession {
    config: SessionConfig,
    category: Option<Category>,
    pool: Vec<QuizItem>,
    found: Vec<FoundItem>,
    score: u32,
    attempts: u32,
    item_attempts: HashMap<ItemId, u32>,
    used_hints: HashMap<ItemId, u32>,
    pending_explanation: Option<String>,
    status: SessionStatus,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl QuizSession {
    /// Creates an idle session with the given rules.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            category: None,
            pool: Vec::new(),
            found: Vec::new(),
            score: 0,
            attempts: 0,
            item_attempts: HashMap::new(),
            used_hints: HashMap::new(),
            pending_explanation: None,
            status: SessionStatus::Idle,
        }
    }

    /// Starts a session over `category`, superseding any previous state.
    ///
    /// Encounter order is shuffled with the thread RNG; tests use
    /// [`QuizSession::start_with_rng`] for a seeded order.
    pub fn start(&mut self, category: Category) {
        self.start_with_rng(category, &mut rand::rng());
    }

    /// Starts a session, shuffling encounter order with the supplied RNG.
    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, category: Category, rng: &mut R) {
        let mut pool = category.quiz_items();
        pool.shuffle(rng);

        self.category = Some(category);
        self.pool = pool;
        self.found = Vec::new();
        self.score = 0;
        self.attempts = 0;
        self.item_attempts = HashMap::new();
        self.used_hints = HashMap::new();
        self.pending_explanation = None;
        self.status = SessionStatus::Active;
    }

    /// Submits a free-text guess against the remaining pool.
    ///
    /// A match moves the item to `found`, scores it by its per-item attempt
    /// count, and surfaces the item's explanation. A miss is attributed to
    /// the nearest candidate and may exhaust the session-wide budget.
    /// No-op outside `Active`.
    pub fn submit_guess(&mut self, guess: &str) -> GuessResult {
        if self.status != SessionStatus::Active {
            return GuessResult::miss();
        }

        self.attempts += 1;
        let scan = match_guess(guess, &self.pool);

        let Some(index) = scan.matched else {
            if let Some(nearest) = scan.nearest {
                let id = self.pool[nearest].id().clone();
                *self.item_attempts.entry(id).or_insert(0) += 1;
            }
            if self.attempts >= self.config.attempt_cap() {
                self.status = SessionStatus::Exhausted;
            }
            return GuessResult::miss();
        };

        let item = self.pool.remove(index);
        let prior_misses = self.item_attempts.get(item.id()).copied().unwrap_or(0);
        let points = points_for_attempt(prior_misses + 1);
        self.score += points;
        debug_assert!(self.score <= MAX_SESSION_SCORE);

        let explanation = if self.config.explanations_enabled() {
            self.category
                .as_ref()
                .and_then(|c| c.explanation_at(item.position()))
                .map(ToOwned::to_owned)
        } else {
            None
        };
        self.pending_explanation.clone_from(&explanation);

        self.found.push(FoundItem {
            item: item.clone(),
            points,
        });
        if self.pool.is_empty() {
            self.status = SessionStatus::Completed;
        }

        GuessResult {
            correct: true,
            item: Some(item),
            points,
            explanation,
        }
    }

    /// Reveals the next hint for an item, in list order, at most three.
    ///
    /// Returns `None` once hints are exhausted, for unknown ids, when hints
    /// are disabled, or outside `Active`. Never an error.
    pub fn request_hint(&mut self, item_id: &ItemId) -> Option<String> {
        if self.status != SessionStatus::Active || !self.config.hints_enabled() {
            return None;
        }
        let category = self.category.as_ref()?;

        let position = (0..ITEMS_PER_CATEGORY)
            .find(|&i| ItemId::derive(category.id(), i) == *item_id)
            .map(|i| (i as u8) + 1)?;

        let hints = category.hints_at(position);
        let used = self.used_hints.get(item_id).copied().unwrap_or(0) as usize;
        if used >= hints.len().min(MAX_HINTS_PER_ITEM) {
            return None;
        }

        let hint = hints[used].clone();
        *self.used_hints.entry(item_id.clone()).or_insert(0) += 1;
        Some(hint)
    }

    /// Clears the explanation surfaced by the last correct guess.
    pub fn clear_explanation(&mut self) {
        self.pending_explanation = None;
    }

    /// Snapshots the session for later resume and marks it abandoned.
    ///
    /// The snapshot is a deep, independent copy. Returns `None` outside
    /// `Active`.
    pub fn abandon(&mut self, saved_at: DateTime<Utc>) -> Option<SessionSnapshot> {
        if self.status != SessionStatus::Active {
            return None;
        }
        let category = self.category.as_ref()?;

        let snapshot = SessionSnapshot {
            id: SavedSessionId::random(),
            category_id: category.id().clone(),
            category_title: category.title().to_owned(),
            found: self.found.clone(),
            pool: self.pool.clone(),
            score: self.score,
            attempts: self.attempts,
            used_hints: self.used_hints.clone(),
            item_attempts: self.item_attempts.clone(),
            saved_at,
        };

        self.status = SessionStatus::Abandoned;
        Some(snapshot)
    }

    /// Rehydrates a session from a snapshot, superseding current state.
    ///
    /// The caller supplies the matching catalog category, since snapshots
    /// only carry its id and title.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::CategoryMismatch` if `category` is not the one
    /// the snapshot was taken from, and `SessionError::MalformedSnapshot`
    /// if the snapshot does not account for all ten items.
    pub fn resume(
        &mut self,
        category: Category,
        snapshot: SessionSnapshot,
    ) -> Result<(), SessionError> {
        if snapshot.category_id != *category.id() {
            return Err(SessionError::CategoryMismatch {
                snapshot: snapshot.category_id,
                given: category.id().clone(),
            });
        }
        if snapshot.item_count() != ITEMS_PER_CATEGORY {
            return Err(SessionError::MalformedSnapshot {
                len: snapshot.item_count(),
                expected: ITEMS_PER_CATEGORY,
            });
        }

        self.category = Some(category);
        self.pool = snapshot.pool;
        self.found = snapshot.found;
        self.score = snapshot.score;
        self.attempts = snapshot.attempts;
        self.used_hints = snapshot.used_hints;
        self.item_attempts = snapshot.item_attempts;
        self.pending_explanation = None;
        self.status = SessionStatus::Active;
        Ok(())
    }

    /// Force-terminates an active session (e.g. a countdown reaching zero).
    ///
    /// Idempotent: no effect on a non-active session, so a stale timer
    /// firing after completion or abandonment cannot corrupt state.
    pub fn end(&mut self) {
        if self.status == SessionStatus::Active {
            self.status = SessionStatus::Exhausted;
        }
    }

    /// Discards the session entirely, back to `Idle`. Saved snapshots are
    /// untouched.
    pub fn reset(&mut self) {
        let config = self.config.clone();
        *self = Self::new(config);
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Session-wide submissions so far, right or wrong.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Wrong guesses attributed to `item_id` so far.
    #[must_use]
    pub fn attempts_for(&self, item_id: &ItemId) -> u32 {
        self.item_attempts.get(item_id).copied().unwrap_or(0)
    }

    /// Hints already revealed for `item_id`.
    #[must_use]
    pub fn hints_used(&self, item_id: &ItemId) -> u32 {
        self.used_hints.get(item_id).copied().unwrap_or(0)
    }

    /// Items not yet found, in encounter order.
    #[must_use]
    pub fn pool(&self) -> &[QuizItem] {
        &self.pool
    }

    /// Items found so far, in discovery order.
    #[must_use]
    pub fn found(&self) -> &[FoundItem] {
        &self.found
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn pending_explanation(&self) -> Option<&str> {
        self.pending_explanation.as_deref()
    }

    /// Read-only projection for the presentation layer.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            status: self.status,
            category_title: self.category.as_ref().map(|c| c.title().to_owned()),
            score: self.score,
            max_score: MAX_SESSION_SCORE,
            attempts: self.attempts,
            attempt_cap: self.config.attempt_cap(),
            found: self.found.clone(),
            remaining: self.pool.len(),
            pending_explanation: self.pending_explanation.clone(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
