//! Flattened record types handed to the dashboard
//!
//! These are the tabular shapes: one uniform schema per table, no
//! optional nesting, counts already parsed.

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// One row of the channel table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    /// Channel ID (e.g., "UC_x5XG1OV2P6uZZ5FSM9Ttw")
    pub channel_id: String,

    /// Display name
    pub title: Option<String>,

    pub description: Option<String>,

    /// 0 when the channel hides its subscriber count
    pub subscriber_count: u64,

    pub video_count: u64,

    pub view_count: u64,

    /// Creation timestamp, RFC 3339 as returned by the API
    pub published_at: Option<String>,

    pub thumbnail_url: Option<String>,
}

/// One row of the video table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video ID (e.g., "dQw4w9WgXcQ")
    pub video_id: String,

    pub title: Option<String>,

    pub description: Option<String>,

    /// Publish timestamp, RFC 3339 as returned by the API
    pub published_at: Option<String>,

    /// ISO 8601 duration (e.g., "PT4M13S"), left unparsed
    pub duration: Option<String>,

    pub view_count: u64,

    pub like_count: u64,

    /// 0 when comments are disabled
    pub comment_count: u64,

    pub thumbnail_url: Option<String>,
}

/// An identifier that batch extraction could not resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedChannel {
    /// The identifier after trimming
    pub channel_id: String,
    pub kind: ErrorKind,
    /// Human-readable failure message
    pub reason: String,
}

/// Outcome of a best-effort batch extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelBatch {
    /// Resolved channels, in input order
    pub records: Vec<ChannelRecord>,
    /// Unresolved identifiers, in input order
    pub skipped: Vec<SkippedChannel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_record_serialization() {
        let channel = ChannelRecord {
            channel_id: "UC_x5XG1OV2P6uZZ5FSM9Ttw".to_string(),
            title: Some("Google for Developers".to_string()),
            description: Some("Subscribe to join a community".to_string()),
            subscriber_count: 2_480_000,
            video_count: 6_200,
            view_count: 290_000_000,
            published_at: Some("2007-08-23T00:34:43Z".to_string()),
            thumbnail_url: Some("https://yt3.ggpht.com/high.jpg".to_string()),
        };

        let json = serde_json::to_string(&channel).expect("Serialization should succeed");
        let deserialized: ChannelRecord =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(channel, deserialized);
    }

    #[test]
    fn test_video_record_with_none_fields() {
        let video = VideoRecord {
            video_id: "xyz789".to_string(),
            title: None,
            description: None,
            published_at: None,
            duration: None,
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            thumbnail_url: None,
        };

        let json = serde_json::to_value(&video).expect("Serialization should succeed");
        assert_eq!(json["comment_count"], 0);
        assert!(json["title"].is_null());
    }

    #[test]
    fn test_channel_batch_default_is_empty() {
        let batch = ChannelBatch::default();
        assert!(batch.records.is_empty());
        assert!(batch.skipped.is_empty());
    }
}
