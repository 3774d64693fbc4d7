//! Mock YouTube API fixtures shared by the integration tests

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};
use ytscope_core::{ClientConfig, YoutubeService};

pub const API_KEY: &str = "test-api-key";

/// Service pointed at the mock server
pub fn service_for(server: &MockServer) -> YoutubeService {
    let config = ClientConfig::new(API_KEY).with_base_url(server.uri());
    YoutubeService::with_config(config).expect("service should build")
}

/// Matches requests that carry no `pageToken` parameter
pub struct FirstPage;

impl Match for FirstPage {
    fn matches(&self, request: &Request) -> bool {
        !request.url.query_pairs().any(|(key, _)| key == "pageToken")
    }
}

pub fn channel_item(id: &str, title: &str) -> Value {
    json!({
        "kind": "youtube#channel",
        "id": id,
        "snippet": {
            "title": title,
            "description": format!("About {}", title),
            "publishedAt": "2015-03-01T12:00:00Z",
            "thumbnails": {
                "default": { "url": format!("https://yt3.ggpht.com/{}/default.jpg", id) },
                "high": { "url": format!("https://yt3.ggpht.com/{}/high.jpg", id) }
            }
        },
        "statistics": {
            "viewCount": "1000",
            "subscriberCount": "250",
            "hiddenSubscriberCount": false,
            "videoCount": "12"
        }
    })
}

pub fn channel_list(items: Vec<Value>) -> Value {
    let total = items.len();
    json!({
        "kind": "youtube#channelListResponse",
        "pageInfo": { "totalResults": total, "resultsPerPage": 5 },
        "items": items
    })
}

/// Google error envelope as returned with non-2xx statuses
pub fn api_error(code: u16, reason: &str, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "errors": [{ "message": message, "domain": "youtube", "reason": reason }]
        }
    })
}

/// Mounts a `channels.list` snippet+statistics mock for one ID
pub async fn mount_channel(server: &MockServer, id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("part", "snippet,statistics"))
        .and(query_param("id", id))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mounts the uploads-playlist lookup for a channel
pub async fn mount_uploads(server: &MockServer, channel_id: &str, playlist_id: &str) {
    let item = json!({
        "id": channel_id,
        "contentDetails": { "relatedPlaylists": { "likes": "", "uploads": playlist_id } }
    });
    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("part", "contentDetails"))
        .and(query_param("id", channel_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(channel_list(vec![item])))
        .expect(1)
        .mount(server)
        .await;
}

pub fn video_id(n: usize) -> String {
    format!("vid{:03}", n)
}

pub fn playlist_page(ids: &[String], next_page_token: Option<&str>) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "kind": "youtube#playlistItem",
                "snippet": {
                    "title": format!("Upload {}", id),
                    "resourceId": { "kind": "youtube#video", "videoId": id }
                }
            })
        })
        .collect();

    let mut page = json!({
        "kind": "youtube#playlistItemListResponse",
        "items": items,
        "pageInfo": { "totalResults": 120, "resultsPerPage": 50 }
    });
    if let Some(token) = next_page_token {
        page["nextPageToken"] = json!(token);
    }
    page
}

pub fn video_item(id: &str) -> Value {
    json!({
        "kind": "youtube#video",
        "id": id,
        "snippet": {
            "publishedAt": "2020-01-01T00:00:00Z",
            "title": format!("Video {}", id),
            "description": "",
            "thumbnails": { "high": { "url": format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id) } }
        },
        "contentDetails": { "duration": "PT10M1S" },
        "statistics": { "viewCount": "100", "likeCount": "10", "commentCount": "1" }
    })
}

pub fn video_list(items: Vec<Value>) -> Value {
    json!({ "kind": "youtube#videoListResponse", "items": items })
}
