//! Error types for the YouTube Data API client
//!
//! Every retrieval operation returns [`Result`], so callers branch on
//! [`YoutubeError::kind`] instead of matching transport details.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Error type for all ytscope operations
///
/// `Display` always yields a human-readable message; [`ErrorKind`] is
/// meant for programmatic branching only.
#[derive(Error, Debug)]
pub enum YoutubeError {
    /// Missing or empty API key
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Channel lookup returned zero items
    #[error("Invalid Channel ID: {0}")]
    InvalidChannel(String),

    /// HTTP 404
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// HTTP 403, covers both quota exhaustion and disabled keys
    #[error("Access denied or quota exceeded: {0}")]
    AccessDenied(String),

    /// Non-success HTTP status other than 403/404
    #[error("YouTube API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Network failure before a status was received
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Failed to parse API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Anything else
    #[error("{0}")]
    Unknown(String),

    /// Video listing aborted part way through
    #[error("YouTube API Error while listing videos of {channel_id}: {source}")]
    VideoListing {
        channel_id: String,
        #[source]
        source: Box<YoutubeError>,
    },
}

/// Classification of a [`YoutubeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    NotFound,
    QuotaOrDenied,
    Transport,
    Unknown,
}

impl YoutubeError {
    /// Classify this error
    ///
    /// A [`YoutubeError::VideoListing`] wrapper reports the kind of its cause.
    pub fn kind(&self) -> ErrorKind {
        match self {
            YoutubeError::Configuration(_) => ErrorKind::Configuration,
            YoutubeError::InvalidChannel(_) | YoutubeError::NotFound(_) => ErrorKind::NotFound,
            YoutubeError::AccessDenied(_) => ErrorKind::QuotaOrDenied,
            YoutubeError::ApiError { .. } | YoutubeError::HttpError(_) => ErrorKind::Transport,
            YoutubeError::ParseError(_) | YoutubeError::Unknown(_) => ErrorKind::Unknown,
            YoutubeError::VideoListing { source, .. } => source.kind(),
        }
    }

    pub(crate) fn invalid_channel(channel_id: &str) -> Self {
        YoutubeError::InvalidChannel(channel_id.to_string())
    }
}

impl Serialize for YoutubeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("YoutubeError", 2)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for ytscope operations
pub type Result<T> = std::result::Result<T, YoutubeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_configuration() {
        let error = YoutubeError::Configuration("API key is empty".to_string());
        assert_eq!(error.to_string(), "Configuration error: API key is empty");
    }

    #[test]
    fn test_error_display_not_found() {
        let error = YoutubeError::invalid_channel("UCnope");
        assert_eq!(error.to_string(), "Invalid Channel ID: UCnope");
    }

    #[test]
    fn test_error_display_resource_not_found() {
        let error = YoutubeError::NotFound("playlistNotFound".to_string());
        assert_eq!(error.to_string(), "Resource not found: playlistNotFound");
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_error_display_api_error() {
        let error = YoutubeError::ApiError {
            status: 500,
            message: "backendError".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "YouTube API request failed with status 500: backendError"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            YoutubeError::Configuration(String::new()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            YoutubeError::NotFound(String::new()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            YoutubeError::AccessDenied(String::new()).kind(),
            ErrorKind::QuotaOrDenied
        );
        assert_eq!(
            YoutubeError::ApiError {
                status: 502,
                message: String::new()
            }
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            YoutubeError::Unknown(String::new()).kind(),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn test_parse_error_is_unknown() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = YoutubeError::from(json_err);
        assert_eq!(error.kind(), ErrorKind::Unknown);
        assert!(error.to_string().starts_with("Failed to parse API response"));
    }

    #[test]
    fn test_video_listing_reports_cause_kind() {
        let error = YoutubeError::VideoListing {
            channel_id: "UCabc".to_string(),
            source: Box::new(YoutubeError::AccessDenied("quotaExceeded".to_string())),
        };
        assert_eq!(error.kind(), ErrorKind::QuotaOrDenied);
        assert!(error.to_string().contains("quotaExceeded"));
        assert!(error.to_string().contains("UCabc"));
    }

    #[test]
    fn test_error_serialize() {
        let error = YoutubeError::invalid_channel("UCnope");
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(
            json,
            r#"{"kind":"not_found","message":"Invalid Channel ID: UCnope"}"#
        );
    }
}
