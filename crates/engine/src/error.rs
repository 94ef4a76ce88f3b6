//! Shared error types for the engine crate.
//!
//! Out-of-turn state-machine calls are deliberately NOT errors: they are
//! silent no-ops so the presentation layer can invoke the engine
//! speculatively. Errors here cover the persistence boundary and snapshot
//! rehydration, where failing silently would corrupt state.

use thiserror::Error;

use quiz_core::model::CategoryId;
use storage::repository::StorageError;

/// Errors emitted by session orchestration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("snapshot belongs to category {snapshot}, given {given}")]
    CategoryMismatch {
        snapshot: CategoryId,
        given: CategoryId,
    },

    #[error("snapshot accounts for {len} items, expected {expected}")]
    MalformedSnapshot { len: usize, expected: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
