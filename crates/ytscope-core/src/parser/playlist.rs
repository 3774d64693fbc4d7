//! `playlistItems.list` response parser
//!
//! Only the parts needed to walk an uploads playlist are modelled.
//!
//! See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>

use serde::Deserialize;

use crate::error::Result;

/// One page of `playlistItems.list`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    #[serde(default)]
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub resource_id: ResourceId,
}

/// Reference to the video a playlist entry points at
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub video_id: Option<String>,
}

impl PlaylistItemListResponse {
    /// Video IDs on this page, in playlist order
    ///
    /// Entries without a video reference are left out.
    pub fn video_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.snippet.resource_id.video_id.clone())
            .filter(|id| !id.is_empty())
            .collect()
    }

    /// Continuation token for the next page, `None` on the last page
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Parses a `playlistItems.list` response body
///
/// # Errors
/// Returns `ParseError` if the body is not a JSON object of the expected shape
pub fn parse_playlist_page(body: &str) -> Result<PlaylistItemListResponse> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_playlist_page() {
        let body = r#"{
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "EAAaBlBUOkNESQ",
            "items": [
                {"snippet": {"title": "First", "resourceId": {"kind": "youtube#video", "videoId": "vid1"}}},
                {"snippet": {"title": "Second", "resourceId": {"kind": "youtube#video", "videoId": "vid2"}}}
            ],
            "pageInfo": {"totalResults": 120, "resultsPerPage": 50}
        }"#;

        let page = parse_playlist_page(body).unwrap();
        assert_eq!(page.video_ids(), vec!["vid1", "vid2"]);
        assert_eq!(page.next_page_token(), Some("EAAaBlBUOkNESQ"));
    }

    #[test]
    fn test_last_page_has_no_token() {
        let page = parse_playlist_page(r#"{"items":[]}"#).unwrap();
        assert!(page.video_ids().is_empty());
        assert_eq!(page.next_page_token(), None);
    }

    #[test]
    fn test_empty_token_ends_pagination() {
        let page = parse_playlist_page(r#"{"items":[],"nextPageToken":""}"#).unwrap();
        assert_eq!(page.next_page_token(), None);
    }

    #[test]
    fn test_entries_without_video_are_skipped() {
        let body = r#"{"items":[
            {"snippet":{"resourceId":{"kind":"youtube#video","videoId":"vid1"}}},
            {"snippet":{"title":"Deleted video"}},
            {"snippet":{"resourceId":{"kind":"youtube#video","videoId":"vid3"}}}
        ]}"#;
        let page = parse_playlist_page(body).unwrap();
        assert_eq!(page.video_ids(), vec!["vid1", "vid3"]);
    }
}
