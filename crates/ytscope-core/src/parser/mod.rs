//! JSON parsers for YouTube Data API responses
//!
//! Contains one module per resource type.

pub mod api_error;
pub mod channels;
pub mod common;
pub mod playlist;
pub mod videos;

pub use api_error::describe_error_body;
pub use channels::{Channel, parse_channel_list};
pub use playlist::parse_playlist_page;
pub use videos::parse_video_list;
