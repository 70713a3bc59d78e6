//! Japanese script detection
//!
//! The presence of any Japanese-script character is a hard signal: mixed
//! Japanese/Latin text is always tagged `jp`, regardless of how many Latin
//! stop-words co-occur. Detection therefore runs before lexical scoring and
//! short-circuits the pipeline on the first hit.

/// Returns true if the character falls in a Japanese script block.
///
/// Covered blocks:
/// - Hiragana: U+3040–U+309F
/// - Katakana: U+30A0–U+30FF
/// - CJK Unified Ideographs Extension A: U+3400–U+4DBF
/// - CJK Unified Ideographs (Kanji): U+4E00–U+9FFF
/// - Halfwidth and Fullwidth Forms: U+FF00–U+FFEF
#[inline]
pub fn is_japanese_char(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}' |  // Hiragana
        '\u{30A0}'..='\u{30FF}' |  // Katakana
        '\u{3400}'..='\u{4DBF}' |  // CJK Extension A
        '\u{4E00}'..='\u{9FFF}' |  // CJK Unified Ideographs
        '\u{FF00}'..='\u{FFEF}'    // Halfwidth and Fullwidth Forms
    )
}

/// Scans the text for any Japanese-script character.
///
/// Empty input is valid and yields `false`. Never fails: any `&str` is
/// scannable.
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}
