mod category;
mod ids;
mod item;
mod snapshot;

pub use category::{Category, CategoryError, ITEMS_PER_CATEGORY, MAX_HINTS_PER_ITEM};
pub use ids::{CategoryId, ItemId, ParseIdError, SavedSessionId};
pub use item::QuizItem;
pub use snapshot::{FoundItem, SessionSnapshot};
