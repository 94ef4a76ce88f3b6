//! Free-text canonicalization for answer comparison.
//!
//! Guesses are typed on phones, mid-game, often without accents or exact
//! punctuation. Comparison must be lenient on casing, diacritics, and
//! whitespace while leaving the letters themselves intact.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes a string for comparison.
///
/// In order: lowercase; NFD decomposition with combining marks dropped (so
/// `"Étas-Unis"` and `"Etas-Unis"` agree); punctuation mapped to a space
/// (so hyphenated and spaced spellings agree); whitespace trimmed and
/// collapsed to single spaces.
///
/// Pure and idempotent: `normalize(normalize(s)) == normalize(s)`.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  The Dark Knight  "), "the dark knight");
    }

    #[test]
    fn strips_accents() {
        assert_eq!(normalize("Étas-Unis!"), normalize("etas unis"));
        assert_eq!(normalize("Thaïlande"), "thailande");
    }

    #[test]
    fn punctuation_becomes_a_word_break() {
        assert_eq!(normalize("Harry Potter à l'École"), "harry potter a l ecole");
        assert_eq!(normalize("Shrek 2!"), "shrek 2");
        assert_eq!(normalize("Etats-Unis"), normalize("Etats Unis"));
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(normalize("star   wars\tepisode  III"), "star wars episode iii");
    }

    #[test]
    fn idempotent() {
        for s in ["", "  ", "Étas-Unis!", "Pirates des Caraïbes : Le Secret"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n"), "");
        assert_eq!(normalize("!!!"), "");
    }
}
