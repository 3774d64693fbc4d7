//! Pieces shared by every YouTube resource

use serde::{Deserialize, Serialize};

/// One thumbnail variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// The thumbnail variants the API may attach to a snippet
///
/// See: <https://developers.google.com/youtube/v3/docs/thumbnails>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// URL of the preferred thumbnail
    ///
    /// Prefers `high`, then falls back from the largest remaining size
    /// to the smallest.
    pub fn best_url(&self) -> Option<String> {
        [
            &self.high,
            &self.maxres,
            &self.standard,
            &self.medium,
            &self.default,
        ]
        .into_iter()
        .flatten()
        .find_map(|thumb| thumb.url.clone())
    }
}

/// Parses a string-valued API counter
///
/// Absent or malformed counters count as 0.
pub fn parse_count(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0)
}
