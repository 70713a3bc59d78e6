//! Classification pipeline
//!
//! A strict three-stage pipeline: Japanese script detection short-circuits
//! to `jp`; otherwise the lexical scorer counts stop-word hits and the
//! resolver picks the strict majority, with ties (including the 0-0
//! no-signal case) resolving to `Unknown`.

use crate::language::Language;
use crate::scorer::{self, LexiconScores};
use crate::script;

/// Resolves lexicon scores into a tag.
///
/// Only reached when script detection found nothing. Equal counts, whether
/// zero or nonzero, mean "cannot determine" rather than a guessed default.
fn resolve(scores: LexiconScores) -> Language {
    if scores.indonesian > scores.english {
        Language::Indonesian
    } else if scores.english > scores.indonesian {
        Language::English
    } else {
        Language::Unknown
    }
}

/// Classifies text into one of the four language tags.
///
/// Pure and infallible: the same input always yields the same tag, no input
/// panics, and empty input yields [`Language::Unknown`].
///
/// # Example
///
/// ```rust
/// use lingtag_core::{classify, Language};
///
/// assert_eq!(classify("これはテストです"), Language::Japanese);
/// assert_eq!(classify("yang dan di ini itu"), Language::Indonesian);
/// assert_eq!(classify("the and is in of"), Language::English);
/// assert_eq!(classify(""), Language::Unknown);
/// ```
pub fn classify(text: &str) -> Language {
    if script::contains_japanese(text) {
        return Language::Japanese;
    }
    resolve(scorer::score(text))
}

/// Classifies possibly-absent text.
///
/// `None` stands in for the non-text inputs of loosely-typed callers and
/// maps to [`Language::Unknown`] without error.
pub fn classify_opt(text: Option<&str>) -> Language {
    text.map_or(Language::Unknown, classify)
}
