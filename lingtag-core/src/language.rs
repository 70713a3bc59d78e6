//! Language tag type for classification results

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed set of classification outcomes.
///
/// `Unknown` is a first-class result, not an error: empty input, absent
/// input, and score ties all resolve to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// Japanese, detected by script presence alone
    #[cfg_attr(feature = "serde", serde(rename = "jp"))]
    Japanese,
    /// Indonesian, detected by stop-word majority
    #[cfg_attr(feature = "serde", serde(rename = "id"))]
    Indonesian,
    /// English, detected by stop-word majority
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
    /// No determination could be made
    #[default]
    Unknown,
}

impl Language {
    /// Get the wire tag for this language
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Japanese => "jp",
            Language::Indonesian => "id",
            Language::English => "en",
            Language::Unknown => "unknown",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Japanese => "Japanese",
            Language::Indonesian => "Indonesian",
            Language::English => "English",
            Language::Unknown => "Unknown",
        }
    }

    /// Create a Language from a tag or name.
    ///
    /// Unrecognized input maps to `Unknown`, the classifier's conservative
    /// default, rather than any concrete language.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "jp" | "ja" | "jpn" | "japanese" => Language::Japanese,
            "id" | "ind" | "indonesian" => Language::Indonesian,
            "en" | "eng" | "english" => Language::English,
            _ => Language::Unknown,
        }
    }

    /// All concrete languages the classifier can report, excluding `Unknown`
    pub fn supported() -> [Language; 3] {
        [Language::Japanese, Language::Indonesian, Language::English]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Language::from_tag(s))
    }
}
