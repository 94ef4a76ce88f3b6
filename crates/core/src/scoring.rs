//! Degressive scoring: fewer points the more attempts an item took.

use crate::model::ITEMS_PER_CATEGORY;

/// Points for a first-attempt find.
pub const MAX_POINTS_PER_ITEM: u32 = 3;

/// Attempts after which an item is forfeited for points.
pub const MAX_ATTEMPTS_PER_ITEM: u32 = 3;

/// Default session-wide submission budget (3 attempts x 10 items).
pub const DEFAULT_ATTEMPT_CAP: u32 = 30;

/// Highest score a session can reach.
pub const MAX_SESSION_SCORE: u32 = ITEMS_PER_CATEGORY as u32 * MAX_POINTS_PER_ITEM;

/// Points awarded when an item is found on its `attempt`-th attempt.
///
/// 3/2/1 for attempts one through three; anything later earns nothing and
/// the item counts as missed.
#[must_use]
pub fn points_for_attempt(attempt: u32) -> u32 {
    match attempt {
        1 => 3,
        2 => 2,
        3 => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degressive_scale() {
        assert_eq!(points_for_attempt(1), 3);
        assert_eq!(points_for_attempt(2), 2);
        assert_eq!(points_for_attempt(3), 1);
    }

    #[test]
    fn fourth_attempt_forfeits() {
        assert_eq!(points_for_attempt(4), 0);
        assert_eq!(points_for_attempt(100), 0);
        assert_eq!(points_for_attempt(0), 0);
    }

    #[test]
    fn session_score_is_bounded() {
        assert_eq!(MAX_SESSION_SCORE, 30);
    }
}
