#![forbid(unsafe_code)]

//! Saved-session store: an append-only log of abandoned-session snapshots
//! with explicit delete, behind a repository trait so hosts can pick an
//! in-memory or sqlite backend.

pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryRepository, SavedSessionRepository, StorageError};
pub use sqlite::{SqliteInitError, SqliteRepository};
