#![forbid(unsafe_code)]

//! Domain core of the top-10 quiz engine: catalog models, answer
//! normalization and matching, the scoring rule, and snapshot shapes.

pub mod matching;
pub mod model;
pub mod scoring;
pub mod text;
pub mod time;

pub use model::{
    Category, CategoryError, CategoryId, FoundItem, ItemId, QuizItem, SavedSessionId,
    SessionSnapshot, ITEMS_PER_CATEGORY, MAX_HINTS_PER_ITEM,
};
pub use time::Clock;
