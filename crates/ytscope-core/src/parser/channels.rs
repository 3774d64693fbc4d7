//! `channels.list` response parser
//!
//! See: <https://developers.google.com/youtube/v3/docs/channels/list>

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{Thumbnails, parse_count};
use crate::error::Result;
use crate::types::ChannelRecord;

/// Response body of `channels.list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelListResponse {
    /// Absent entirely when no channel matched
    #[serde(default)]
    pub items: Vec<Channel>,
}

/// A `channel` resource as the API returned it
///
/// Fields this crate does not model are kept in `extra`, so the raw
/// payload survives a round trip to the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_details: Option<ChannelContentDetails>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Channel creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Channel counters, string-valued on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
    /// Omitted when `hiddenSubscriberCount` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_count: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    #[serde(default)]
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPlaylists {
    /// Playlist holding every public upload of the channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploads: Option<String>,
}

impl Channel {
    /// Flattens this channel into a table row
    pub fn to_record(&self) -> ChannelRecord {
        ChannelRecord {
            channel_id: self.id.clone(),
            title: self.snippet.title.clone(),
            description: self.snippet.description.clone(),
            subscriber_count: parse_count(self.statistics.subscriber_count.as_deref()),
            video_count: parse_count(self.statistics.video_count.as_deref()),
            view_count: parse_count(self.statistics.view_count.as_deref()),
            published_at: self.snippet.published_at.clone(),
            thumbnail_url: self.snippet.thumbnails.best_url(),
        }
    }

    /// ID of the channel's uploads playlist, if the response carried one
    pub fn uploads_playlist_id(&self) -> Option<&str> {
        self.content_details
            .as_ref()
            .and_then(|details| details.related_playlists.uploads.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// Parses a `channels.list` response body
///
/// # Errors
/// Returns `ParseError` if the body is not a JSON object of the expected shape
pub fn parse_channel_list(body: &str) -> Result<ChannelListResponse> {
    Ok(serde_json::from_str(body)?)
}
