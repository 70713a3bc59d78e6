//! Stop-word lexicons
//!
//! Two fixed, disjoint word lists act as lexical fingerprints for the Latin
//! arm of the classifier. Each is a literal in-source list, materialized
//! once into a `HashSet` for O(1) whole-word membership and never mutated
//! afterwards. Disjointness is pinned by a test so a single token can never
//! legitimately count for both languages.

use std::collections::HashSet;
use std::sync::LazyLock;

/// High-frequency Indonesian function words
const INDONESIAN_WORDS: &[&str] = &[
    "yang", "dan", "di", "ini", "itu", "dengan", "untuk", "tidak", "dari",
    "dalam", "akan", "pada", "juga", "ke", "karena", "ada", "adalah", "atau",
    "bisa", "sudah", "saya", "kamu", "dia", "kita", "mereka", "jika",
    "seperti", "oleh", "telah", "harus", "tapi", "hanya", "lebih", "masih",
    "saat", "bukan", "agar", "sangat", "belum", "ketika",
];

/// High-frequency English function words
const ENGLISH_WORDS: &[&str] = &[
    "the", "and", "is", "in", "of", "to", "a", "that", "it", "for", "was",
    "on", "are", "with", "as", "at", "be", "this", "have", "from", "or",
    "had", "by", "not", "but", "what", "were", "when", "we", "there", "can",
    "an", "your", "which", "their", "will", "would", "about", "them", "then",
    "these", "some", "her", "him", "his", "she", "has", "been", "than", "its",
];

/// Indonesian stop-word set, built once for the process lifetime
pub static INDONESIAN: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INDONESIAN_WORDS.iter().copied().collect());

/// English stop-word set, built once for the process lifetime
pub static ENGLISH: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_WORDS.iter().copied().collect());
