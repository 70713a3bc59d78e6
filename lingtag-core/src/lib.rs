//! Heuristic language tagging for Indonesian, English, and Japanese
//!
//! Classifies arbitrary text into one of four closed tags (`jp`, `id`, `en`,
//! `unknown`) with a two-stage heuristic:
//!
//! 1. **Script detection**: any character in the Japanese Unicode blocks
//!    (Hiragana, Katakana, Kanji, fullwidth/halfwidth forms) is a hard
//!    signal and short-circuits to `jp`, even in mixed Japanese/Latin text.
//! 2. **Lexical scoring**: otherwise the text is lowercased, tokenized on
//!    whitespace, stripped of a fixed punctuation set, and scored against
//!    two disjoint stop-word lexicons. The strict majority wins; ties and
//!    the absence of any recognized stop-word both resolve to `unknown`.
//!
//! The classifier is a pure function: no I/O, no shared mutable state, no
//! failure modes. It is safe to call concurrently without coordination; the
//! lexicons are process-wide read-only constants built on first use.
//!
//! # Example
//!
//! ```rust
//! use lingtag_core::{classify, classify_opt, Language};
//!
//! assert_eq!(classify("これは日本語のテキストです"), Language::Japanese);
//! assert_eq!(classify("yang dan di ini itu"), Language::Indonesian);
//! assert_eq!(classify("the and is in of"), Language::English);
//!
//! // Ties and absent input degrade to Unknown rather than erroring.
//! assert_eq!(classify("yang the dan is"), Language::Unknown);
//! assert_eq!(classify_opt(None), Language::Unknown);
//! assert_eq!(Language::Unknown.tag(), "unknown");
//! ```

#![warn(missing_docs)]

pub mod classifier;
pub mod language;
pub mod lexicon;
pub mod scorer;
pub mod script;

pub use classifier::{classify, classify_opt};
pub use language::Language;
pub use scorer::LexiconScores;
