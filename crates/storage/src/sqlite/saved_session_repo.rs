use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use std::collections::HashMap;

use quiz_core::model::{
    CategoryId, FoundItem, ItemId, QuizItem, SavedSessionId, SessionSnapshot,
};

use super::SqliteRepository;
use crate::repository::{SavedSessionRepository, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn conn(e: sqlx::Error) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

fn map_snapshot_row(row: &sqlx::sqlite::SqliteRow) -> Result<SessionSnapshot, StorageError> {
    let id: SavedSessionId = row
        .try_get::<String, _>("id")
        .map_err(ser)?
        .parse()
        .map_err(ser)?;
    let category_id = CategoryId::new(row.try_get::<String, _>("category_id").map_err(ser)?);
    let category_title: String = row.try_get("category_title").map_err(ser)?;
    let found: Vec<FoundItem> =
        serde_json::from_str(&row.try_get::<String, _>("found").map_err(ser)?).map_err(ser)?;
    let pool: Vec<QuizItem> =
        serde_json::from_str(&row.try_get::<String, _>("pool").map_err(ser)?).map_err(ser)?;
    let score = u32_from_i64("score", row.try_get::<i64, _>("score").map_err(ser)?)?;
    let attempts = u32_from_i64("attempts", row.try_get::<i64, _>("attempts").map_err(ser)?)?;
    let used_hints: HashMap<ItemId, u32> =
        serde_json::from_str(&row.try_get::<String, _>("used_hints").map_err(ser)?)
            .map_err(ser)?;
    let item_attempts: HashMap<ItemId, u32> =
        serde_json::from_str(&row.try_get::<String, _>("item_attempts").map_err(ser)?)
            .map_err(ser)?;
    let saved_at: DateTime<Utc> = row.try_get("saved_at").map_err(ser)?;

    Ok(SessionSnapshot {
        id,
        category_id,
        category_title,
        found,
        pool,
        score,
        attempts,
        used_hints,
        item_attempts,
        saved_at,
    })
}

#[async_trait]
impl SavedSessionRepository for SqliteRepository {
    async fn append(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        let found = serde_json::to_string(&snapshot.found).map_err(ser)?;
        let pool = serde_json::to_string(&snapshot.pool).map_err(ser)?;
        let used_hints = serde_json::to_string(&snapshot.used_hints).map_err(ser)?;
        let item_attempts = serde_json::to_string(&snapshot.item_attempts).map_err(ser)?;

        sqlx::query(
            r"
                INSERT INTO saved_sessions (
                    id, category_id, category_title, found, pool,
                    score, attempts, used_hints, item_attempts, saved_at
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ",
        )
        .bind(snapshot.id.to_string())
        .bind(snapshot.category_id.as_str())
        .bind(&snapshot.category_title)
        .bind(found)
        .bind(pool)
        .bind(i64::from(snapshot.score))
        .bind(i64::from(snapshot.attempts))
        .bind(used_hints)
        .bind(item_attempts)
        .bind(snapshot.saved_at)
        .execute(self.pool())
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
            {
                StorageError::Conflict
            } else {
                conn(e)
            }
        })?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<SessionSnapshot>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT
                    id, category_id, category_title, found, pool,
                    score, attempts, used_hints, item_attempts, saved_at
                FROM saved_sessions
                ORDER BY rowid
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(conn)?;

        rows.iter().map(map_snapshot_row).collect()
    }

    async fn get(&self, id: SavedSessionId) -> Result<SessionSnapshot, StorageError> {
        let row = sqlx::query(
            r"
                SELECT
                    id, category_id, category_title, found, pool,
                    score, attempts, used_hints, item_attempts, saved_at
                FROM saved_sessions
                WHERE id = ?1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(self.pool())
        .await
        .map_err(conn)?
        .ok_or(StorageError::NotFound)?;

        map_snapshot_row(&row)
    }

    async fn delete(&self, id: SavedSessionId) -> Result<(), StorageError> {
        let res = sqlx::query("DELETE FROM saved_sessions WHERE id = ?1")
            .bind(id.to_string())
            .execute(self.pool())
            .await
            .map_err(conn)?;

        if res.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
