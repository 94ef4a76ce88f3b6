//! Guess-to-item matching over the remaining pool.
//!
//! A guess matches an item either exactly (after canonicalization) or by
//! similarity: `1 - levenshtein / max_len`, the normalized Levenshtein score,
//! accepted at 0.8 or above. Among non-exact candidates the highest score
//! wins; remaining ties fall to pool order, never to randomness.

use strsim::normalized_levenshtein;

use crate::model::QuizItem;
use crate::text::normalize;

/// Minimum similarity for a non-exact guess to count as correct.
pub const ACCEPT_THRESHOLD: f64 = 0.8;

/// Outcome of scanning a guess against the pool.
///
/// `nearest` is the best-scoring candidate regardless of the threshold; the
/// session uses it to attribute wrong guesses to the item they were closest
/// to, for per-item attempt accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessScan {
    /// Pool index of the accepted match, if any.
    pub matched: Option<usize>,
    /// Pool index of the closest candidate, matched or not.
    pub nearest: Option<usize>,
    /// Similarity of `nearest` (1.0 for an exact match).
    pub best_similarity: f64,
}

impl GuessScan {
    fn none() -> Self {
        Self {
            matched: None,
            nearest: None,
            best_similarity: 0.0,
        }
    }
}

/// Similarity of two raw strings after canonicalization, in `[0, 1]`.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&normalize(a), &normalize(b))
}

/// Scans `guess` against the pool, in pool order.
///
/// The first exact canonical match short-circuits. Otherwise the best
/// similarity across all candidates decides; a blank guess matches nothing
/// and is attributed to nothing.
#[must_use]
pub fn match_guess(guess: &str, pool: &[QuizItem]) -> GuessScan {
    let canonical = normalize(guess);
    if canonical.is_empty() {
        return GuessScan::none();
    }

    let mut best: Option<usize> = None;
    let mut best_similarity = 0.0_f64;

    for (index, item) in pool.iter().enumerate() {
        let candidate = normalize(item.name());
        if candidate == canonical {
            return GuessScan {
                matched: Some(index),
                nearest: Some(index),
                best_similarity: 1.0,
            };
        }

        let score = normalized_levenshtein(&canonical, &candidate);
        // strictly greater keeps the earliest candidate on ties
        if score > best_similarity {
            best_similarity = score;
            best = Some(index);
        }
    }

    GuessScan {
        matched: best.filter(|_| best_similarity >= ACCEPT_THRESHOLD),
        nearest: best,
        best_similarity,
    }
}
