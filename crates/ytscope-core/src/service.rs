//! Main retrieval API for the dashboard
//!
//! Combines the HTTP client with the JSON parsers. Every operation runs
//! its requests one after another and keeps no state between calls.

use tracing::instrument;

use crate::client::{ClientConfig, YoutubeClient};
use crate::error::{Result, YoutubeError};
use crate::parser::videos::Video;
use crate::parser::{Channel, parse_channel_list, parse_playlist_page, parse_video_list};
use crate::types::{ChannelBatch, ChannelRecord, SkippedChannel, VideoRecord};
use crate::url::{channel_details_path, channel_uploads_path, playlist_items_path, videos_path};

/// Build a service handle from an optional API key
///
/// Convenience for callers holding the key as `Option`, e.g. straight
/// from `std::env::var(..).ok()`.
///
/// # Errors
/// - `Configuration` if the key is `None`, empty or whitespace only
///
/// # Example
/// ```
/// use ytscope_core::{ErrorKind, create_client};
/// assert_eq!(create_client(None).unwrap_err().kind(), ErrorKind::Configuration);
/// assert_eq!(create_client(Some("")).unwrap_err().kind(), ErrorKind::Configuration);
/// assert!(create_client(Some("AIzaTestKey")).is_ok());
/// ```
pub fn create_client(api_key: Option<&str>) -> Result<YoutubeService> {
    match api_key {
        Some(key) => YoutubeService::new(key),
        None => Err(YoutubeError::Configuration(
            "API key not found".to_string(),
        )),
    }
}

/// Retrieval API over the YouTube Data API v3
///
/// The handle is immutable; one instance serves every call in the process.
#[derive(Debug)]
pub struct YoutubeService {
    client: YoutubeClient,
}

impl YoutubeService {
    /// Create a new service for the public API endpoint
    ///
    /// # Errors
    /// - `Configuration` if `api_key` is empty or whitespace only
    pub fn new(api_key: &str) -> Result<Self> {
        let client = YoutubeClient::new(api_key)?;
        Ok(Self { client })
    }

    /// Create a new service with custom client configuration
    ///
    /// # Errors
    /// - `Configuration` if the API key is empty or whitespace only
    /// - `HttpError` if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = YoutubeClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Look up one channel's snippet and statistics
    ///
    /// # Arguments
    /// * `channel_id` - Channel ID (e.g., "UC_x5XG1OV2P6uZZ5FSM9Ttw")
    ///
    /// # Returns
    /// The channel resource as the API returned it; use
    /// [`Channel::to_record`] to flatten it
    ///
    /// # Errors
    /// - `InvalidChannel` if the ID is blank or matches no channel
    /// - `AccessDenied` on HTTP 403 (quota or key problems)
    /// - `NotFound` on HTTP 404
    /// - `ApiError` / `HttpError` for other transport failures
    /// - `ParseError` if the response cannot be decoded
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ytscope_core::Result<()> {
    /// use ytscope_core::YoutubeService;
    /// let service = YoutubeService::new("AIza...")?;
    /// let channel = service.fetch_channel("UC_x5XG1OV2P6uZZ5FSM9Ttw").await?;
    /// println!("{:?}: {:?}", channel.snippet.title, channel.statistics.subscriber_count);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn fetch_channel(&self, channel_id: &str) -> Result<Channel> {
        if channel_id.trim().is_empty() {
            return Err(YoutubeError::invalid_channel(channel_id));
        }

        let body = self.client.fetch(&channel_details_path(channel_id)).await?;
        let response = parse_channel_list(&body)?;

        response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| YoutubeError::invalid_channel(channel_id))
    }

    /// Flatten several channels into table rows, skipping failures
    ///
    /// Identifiers are trimmed, processed in order, and duplicates are
    /// looked up again. A failed identifier is logged and left out.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ytscope_core::Result<()> {
    /// use ytscope_core::{YoutubeService, parse_channel_ids};
    /// let service = YoutubeService::new("AIza...")?;
    /// let ids = parse_channel_ids("UC_x5XG1OV2P6uZZ5FSM9Ttw, UCnotachannel");
    /// for row in service.extract_channels(&ids).await {
    ///     println!("{}: {} subscribers", row.channel_id, row.subscriber_count);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn extract_channels<S: AsRef<str>>(&self, channel_ids: &[S]) -> Vec<ChannelRecord> {
        self.extract_channels_with_report(channel_ids).await.records
    }

    /// Like [`YoutubeService::extract_channels`], also listing what was skipped
    #[instrument(skip_all, fields(requested = channel_ids.len()))]
    pub async fn extract_channels_with_report<S: AsRef<str>>(
        &self,
        channel_ids: &[S],
    ) -> ChannelBatch {
        let mut batch = ChannelBatch::default();

        for raw_id in channel_ids {
            let channel_id = raw_id.as_ref().trim();

            match self.fetch_channel(channel_id).await {
                Ok(channel) => {
                    let mut record = channel.to_record();
                    if record.channel_id.is_empty() {
                        record.channel_id = channel_id.to_string();
                    }
                    batch.records.push(record);
                }
                Err(e) => {
                    tracing::warn!(channel_id, error = %e, "skipping channel");
                    batch.skipped.push(SkippedChannel {
                        channel_id: channel_id.to_string(),
                        kind: e.kind(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            resolved = batch.records.len(),
            skipped = batch.skipped.len(),
            "channel batch finished"
        );
        batch
    }

    /// Collect metadata of every upload of a channel
    ///
    /// Walks the channel's uploads playlist 50 entries at a time and
    /// fetches details for each page in one batched request.
    ///
    /// # Returns
    /// Video rows in playlist order; empty if the channel has no uploads
    ///
    /// # Errors
    /// - `InvalidChannel` if the channel or its uploads playlist cannot be resolved
    /// - any error of the uploads lookup itself, unwrapped
    /// - `VideoListing` wrapping the first failure while paging; rows
    ///   collected before that failure are discarded
    #[instrument(skip(self))]
    pub async fn fetch_all_videos(&self, channel_id: &str) -> Result<Vec<VideoRecord>> {
        let uploads = self.resolve_uploads_playlist(channel_id).await?;
        tracing::debug!(%uploads, "resolved uploads playlist");

        self.collect_playlist_videos(&uploads)
            .await
            .map_err(|source| YoutubeError::VideoListing {
                channel_id: channel_id.to_string(),
                source: Box::new(source),
            })
    }

    async fn resolve_uploads_playlist(&self, channel_id: &str) -> Result<String> {
        if channel_id.trim().is_empty() {
            return Err(YoutubeError::invalid_channel(channel_id));
        }

        let body = self.client.fetch(&channel_uploads_path(channel_id)).await?;
        let response = parse_channel_list(&body)?;

        response
            .items
            .first()
            .and_then(Channel::uploads_playlist_id)
            .map(str::to_string)
            .ok_or_else(|| YoutubeError::invalid_channel(channel_id))
    }

    async fn collect_playlist_videos(&self, playlist_id: &str) -> Result<Vec<VideoRecord>> {
        let mut videos = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let body = self
                .client
                .fetch(&playlist_items_path(playlist_id, page_token.as_deref()))
                .await?;
            let page = parse_playlist_page(&body)?;
            let video_ids = page.video_ids();

            if !video_ids.is_empty() {
                let body = self.client.fetch(&videos_path(&video_ids)).await?;
                let details = parse_video_list(&body)?;
                videos.extend(details.items.iter().map(Video::to_record));
            }

            pages += 1;
            tracing::debug!(pages, collected = videos.len(), "fetched uploads page");

            match page.next_page_token() {
                Some(next) if page_token.as_deref() == Some(next) => {
                    return Err(YoutubeError::Unknown(format!(
                        "pagination did not advance past token {}",
                        next
                    )));
                }
                Some(next) => page_token = Some(next.to_string()),
                None => break,
            }
        }

        Ok(videos)
    }
}
