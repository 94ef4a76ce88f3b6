use serde::{Deserialize, Serialize};

use crate::model::ids::{CategoryId, ItemId};

/// One guessable entry of a category.
///
/// Built once per session from catalog data and immutable thereafter.
/// `position` is the item's rank in the canonical list (1..=10), independent
/// of the shuffled order in which the player encounters the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    id: ItemId,
    name: String,
    position: u8,
}

impl QuizItem {
    /// Builds the item at zero-based `index` of `category`.
    #[must_use]
    pub fn from_category(category: &CategoryId, index: usize, name: String) -> Self {
        Self {
            id: ItemId::derive(category, index),
            name,
            // index is bounded by ITEMS_PER_CATEGORY
            position: (index as u8) + 1,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical rank, 1-based.
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_one_based() {
        let cat = CategoryId::new("c");
        let item = QuizItem::from_category(&cat, 0, "Avatar".to_string());
        assert_eq!(item.position(), 1);
        assert_eq!(item.id().as_str(), "c-0");
    }
}
