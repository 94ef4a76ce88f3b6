use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::ids::{CategoryId, ItemId, SavedSessionId};
use crate::model::item::QuizItem;

/// A correctly guessed item together with the points it earned.
///
/// `points == 0` marks an item that was forfeited (found only after its
/// attempt budget was spent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundItem {
    pub item: QuizItem,
    pub points: u32,
}

/// Flat, independent copy of a session at the moment of abandonment.
///
/// Serializable to a plain key-value document; new fields must be optional
/// (serde-defaulted) so older snapshots keep deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: SavedSessionId,
    pub category_id: CategoryId,
    pub category_title: String,
    /// Items discovered so far, in discovery order.
    pub found: Vec<FoundItem>,
    /// Items still guessable, in the shuffled encounter order.
    pub pool: Vec<QuizItem>,
    pub score: u32,
    /// Session-wide submission count (right or wrong).
    pub attempts: u32,
    pub used_hints: HashMap<ItemId, u32>,
    /// Per-item wrong-guess counters. Absent in early snapshots.
    #[serde(default)]
    pub item_attempts: HashMap<ItemId, u32>,
    pub saved_at: DateTime<Utc>,
}

impl SessionSnapshot {
    /// Total number of items the snapshot accounts for, found or not.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.found.len() + self.pool.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn deserializes_without_item_attempts() {
        let cat = CategoryId::new("c");
        let snapshot = SessionSnapshot {
            id: SavedSessionId::random(),
            category_id: cat.clone(),
            category_title: "Ten things".to_string(),
            found: vec![FoundItem {
                item: QuizItem::from_category(&cat, 0, "Avatar".to_string()),
                points: 3,
            }],
            pool: vec![QuizItem::from_category(&cat, 1, "Titanic".to_string())],
            score: 3,
            attempts: 1,
            used_hints: HashMap::new(),
            item_attempts: HashMap::new(),
            saved_at: fixed_now(),
        };

        let mut doc = serde_json::to_value(&snapshot).unwrap();
        doc.as_object_mut().unwrap().remove("item_attempts");
        let revived: SessionSnapshot = serde_json::from_value(doc).unwrap();

        assert_eq!(revived.score, 3);
        assert!(revived.item_attempts.is_empty());
        assert_eq!(revived.item_count(), 2);
    }
}
