//! Lexical scoring
//!
//! Tokenizes non-Japanese text and counts whole-token matches against the
//! two stop-word lexicons. Tokenization lowercases the full input and splits
//! on runs of whitespace; each token then has a fixed punctuation set
//! removed everywhere in its body (not only at the edges) before lookup, so
//! `"yang,"` and `"non-stop"` look up as `"yang"` and `"nonstop"`.

use crate::lexicon;

/// Punctuation removed from token bodies before lexicon lookup
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}',
    '=', '-', '_', '`', '~', '(', ')', '?',
];

/// Per-lexicon match counts for one input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexiconScores {
    /// Tokens matching the Indonesian lexicon
    pub indonesian: usize,
    /// Tokens matching the English lexicon
    pub english: usize,
}

/// Removes every stripped-punctuation character from the token.
fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Scores the text against both lexicons.
///
/// Empty input produces zero tokens and a zero score on both sides. The two
/// membership checks are independent: the scorer itself enforces no
/// exclusivity (the lexicons are disjoint by construction).
pub fn score(text: &str) -> LexiconScores {
    let lowered = text.to_lowercase();
    let mut scores = LexiconScores::default();

    for token in lowered.split_whitespace() {
        let cleaned = clean_token(token);
        if cleaned.is_empty() {
            continue;
        }
        if lexicon::INDONESIAN.contains(cleaned.as_str()) {
            scores.indonesian += 1;
        }
        if lexicon::ENGLISH.contains(cleaned.as_str()) {
            scores.english += 1;
        }
    }

    scores
}
