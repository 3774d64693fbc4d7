//! URL helper functions for the YouTube Data API
//!
//! Builds request paths relative to the API base URL and normalises
//! user-supplied channel identifiers. The API key is never part of the
//! paths built here; the client appends it when sending.

use regex::Regex;
use std::sync::LazyLock;

/// Base URL of the YouTube Data API v3
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Largest page size the API accepts for list calls
pub const MAX_RESULTS: usize = 50;

const CHANNEL_PARTS: &str = "snippet,statistics";
const UPLOADS_PARTS: &str = "contentDetails";
const VIDEO_PARTS: &str = "snippet,contentDetails,statistics";

static CHANNEL_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.|m\.)?youtube\.com/channel/(UC[\w-]{22})(?:[/?#].*)?$")
        .expect("Should be able to parse the channel URL regex")
});

/// Builds the `channels.list` path requesting snippet and statistics
///
/// # Example
/// ```
/// use ytscope_core::url::channel_details_path;
/// let path = channel_details_path("UCabc");
/// assert_eq!(path, "/channels?part=snippet%2Cstatistics&id=UCabc");
/// ```
pub fn channel_details_path(channel_id: &str) -> String {
    channels_path(CHANNEL_PARTS, channel_id)
}

/// Builds the `channels.list` path requesting content details
///
/// Used to resolve the uploads playlist of a channel.
pub fn channel_uploads_path(channel_id: &str) -> String {
    channels_path(UPLOADS_PARTS, channel_id)
}

fn channels_path(part: &str, channel_id: &str) -> String {
    format!(
        "/channels?part={}&id={}",
        urlencoding::encode(part),
        urlencoding::encode(channel_id)
    )
}

/// Builds one page of `playlistItems.list`
///
/// # Arguments
/// * `playlist_id` - Playlist to list (e.g., the uploads playlist "UUabc")
/// * `page_token` - Continuation token, `None` for the first page
///
/// # Example
/// ```
/// use ytscope_core::url::playlist_items_path;
/// let path = playlist_items_path("UUabc", Some("CDIQAA"));
/// assert_eq!(
///     path,
///     "/playlistItems?part=snippet&maxResults=50&playlistId=UUabc&pageToken=CDIQAA"
/// );
/// ```
pub fn playlist_items_path(playlist_id: &str, page_token: Option<&str>) -> String {
    let mut path = format!(
        "/playlistItems?part=snippet&maxResults={}&playlistId={}",
        MAX_RESULTS,
        urlencoding::encode(playlist_id)
    );
    if let Some(token) = page_token {
        path.push_str("&pageToken=");
        path.push_str(&urlencoding::encode(token));
    }
    path
}

/// Builds a batched `videos.list` path for up to [`MAX_RESULTS`] ids
///
/// # Example
/// ```
/// use ytscope_core::url::videos_path;
/// let ids = vec!["a1".to_string(), "b2".to_string()];
/// assert_eq!(
///     videos_path(&ids),
///     "/videos?part=snippet%2CcontentDetails%2Cstatistics&id=a1%2Cb2"
/// );
/// ```
pub fn videos_path(video_ids: &[String]) -> String {
    format!(
        "/videos?part={}&id={}",
        urlencoding::encode(VIDEO_PARTS),
        urlencoding::encode(&video_ids.join(","))
    )
}

/// Normalises one user-supplied channel identifier
///
/// Trims whitespace and reduces `youtube.com/channel/UC…` URLs to the
/// bare ID. Anything else is passed through as typed, so the API decides
/// whether it exists.
///
/// # Returns
/// `None` if the input is empty after trimming
///
/// # Example
/// ```
/// use ytscope_core::url::extract_channel_id;
/// let id = extract_channel_id(" https://www.youtube.com/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw/videos ");
/// assert_eq!(id, Some("UC_x5XG1OV2P6uZZ5FSM9Ttw".to_string()));
/// ```
pub fn extract_channel_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = CHANNEL_URL_REGEX.captures(trimmed) {
        return Some(caps[1].to_string());
    }

    Some(trimmed.to_string())
}

/// Splits comma-separated dashboard input into channel identifiers
///
/// Empty segments are dropped; order and duplicates are kept.
///
/// # Example
/// ```
/// use ytscope_core::url::parse_channel_ids;
/// let ids = parse_channel_ids(" UCabc, UCxyz ,,UCabc");
/// assert_eq!(ids, vec!["UCabc", "UCxyz", "UCabc"]);
/// ```
pub fn parse_channel_ids(text: &str) -> Vec<String> {
    text.split(',').filter_map(extract_channel_id).collect()
}
