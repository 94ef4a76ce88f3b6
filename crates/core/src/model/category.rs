use thiserror::Error;

use crate::model::ids::CategoryId;
use crate::model::item::QuizItem;

/// Every category ranks exactly this many items.
pub const ITEMS_PER_CATEGORY: usize = 10;

/// At most this many hints may be attached to a single item.
pub const MAX_HINTS_PER_ITEM: usize = 3;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Violations of the catalog contract.
///
/// These are programming errors in the catalog data, surfaced loudly when a
/// `Category` is built (before any session starts), never mid-session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category title cannot be empty")]
    EmptyTitle,

    #[error("category must rank exactly {ITEMS_PER_CATEGORY} items, got {len}")]
    WrongItemCount { len: usize },

    #[error("explanations must align with items: expected {ITEMS_PER_CATEGORY}, got {len}")]
    MisalignedExplanations { len: usize },

    #[error("hints must align with items: expected {ITEMS_PER_CATEGORY}, got {len}")]
    MisalignedHints { len: usize },

    #[error("item {index} carries {len} hints, at most {MAX_HINTS_PER_ITEM} allowed")]
    TooManyHints { index: usize, len: usize },
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// A themed, ranked list of exactly ten items to guess.
///
/// Owned by the Category Catalog and immutable once built. Explanations and
/// hints are optional and index-aligned with the canonical item order
/// (rank 1 first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    title: String,
    items: Vec<String>,
    explanations: Option<Vec<String>>,
    hints: Option<Vec<Vec<String>>>,
}

impl Category {
    /// Builds a category from its canonical ranked item list.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError` if the title is empty or the list does not
    /// hold exactly ten items.
    pub fn new(
        id: CategoryId,
        title: impl Into<String>,
        items: Vec<String>,
    ) -> Result<Self, CategoryError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CategoryError::EmptyTitle);
        }
        if items.len() != ITEMS_PER_CATEGORY {
            return Err(CategoryError::WrongItemCount { len: items.len() });
        }

        Ok(Self {
            id,
            title,
            items,
            explanations: None,
            hints: None,
        })
    }

    /// Attaches per-item explanations, index-aligned with the item list.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::MisalignedExplanations` on a length mismatch.
    pub fn with_explanations(mut self, explanations: Vec<String>) -> Result<Self, CategoryError> {
        if explanations.len() != ITEMS_PER_CATEGORY {
            return Err(CategoryError::MisalignedExplanations {
                len: explanations.len(),
            });
        }
        self.explanations = Some(explanations);
        Ok(self)
    }

    /// Attaches per-item ordered hint lists, index-aligned with the item list.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::MisalignedHints` on a length mismatch and
    /// `CategoryError::TooManyHints` if any list exceeds three hints.
    pub fn with_hints(mut self, hints: Vec<Vec<String>>) -> Result<Self, CategoryError> {
        if hints.len() != ITEMS_PER_CATEGORY {
            return Err(CategoryError::MisalignedHints { len: hints.len() });
        }
        if let Some((index, list)) = hints
            .iter()
            .enumerate()
            .find(|(_, list)| list.len() > MAX_HINTS_PER_ITEM)
        {
            return Err(CategoryError::TooManyHints {
                index,
                len: list.len(),
            });
        }
        self.hints = Some(hints);
        Ok(self)
    }

    #[must_use]
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Display names in canonical rank order (rank 1 first).
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Explanation for the item at `position` (1-based rank), if present.
    #[must_use]
    pub fn explanation_at(&self, position: u8) -> Option<&str> {
        let index = usize::from(position.checked_sub(1)?);
        self.explanations
            .as_ref()
            .and_then(|e| e.get(index))
            .map(String::as_str)
    }

    /// Ordered hints for the item at `position` (1-based rank).
    ///
    /// Empty when the category ships no hints.
    #[must_use]
    pub fn hints_at(&self, position: u8) -> &[String] {
        let Some(index) = position.checked_sub(1) else {
            return &[];
        };
        self.hints
            .as_ref()
            .and_then(|h| h.get(usize::from(index)))
            .map_or(&[], Vec::as_slice)
    }

    /// Materializes the ten guessable items with deterministic ids and
    /// canonical positions. Encounter order is the caller's concern.
    #[must_use]
    pub fn quiz_items(&self) -> Vec<QuizItem> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, name)| QuizItem::from_category(&self.id, index, name.clone()))
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
