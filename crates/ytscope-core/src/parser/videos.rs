//! `videos.list` response parser
//!
//! See: <https://developers.google.com/youtube/v3/docs/videos/list>

use serde::Deserialize;

use super::common::{Thumbnails, parse_count};
use crate::error::Result;
use crate::types::VideoRecord;

/// Response body of a batched `videos.list`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

/// A `video` resource
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub content_details: VideoContentDetails,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContentDetails {
    /// ISO 8601 duration, e.g. "PT1H2M3S"
    #[serde(default)]
    pub duration: Option<String>,
}

/// Video counters, string-valued on the wire
///
/// `likeCount` disappears when likes are hidden and `commentCount` when
/// comments are disabled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

impl Video {
    /// Flattens this video into a table row
    pub fn to_record(&self) -> VideoRecord {
        VideoRecord {
            video_id: self.id.clone(),
            title: self.snippet.title.clone(),
            description: self.snippet.description.clone(),
            published_at: self.snippet.published_at.clone(),
            duration: self.content_details.duration.clone(),
            view_count: parse_count(self.statistics.view_count.as_deref()),
            like_count: parse_count(self.statistics.like_count.as_deref()),
            comment_count: parse_count(self.statistics.comment_count.as_deref()),
            thumbnail_url: self.snippet.thumbnails.best_url(),
        }
    }
}

/// Parses a `videos.list` response body
///
/// # Errors
/// Returns `ParseError` if the body is not a JSON object of the expected shape
pub fn parse_video_list(body: &str) -> Result<VideoListResponse> {
    Ok(serde_json::from_str(body)?)
}
