//! ytscope Core Library
//!
//! Provides async API for pulling channel and video metadata from the
//! YouTube Data API v3 and flattening it into table rows.
//!
//! # Overview
//!
//! This crate is the data layer behind the ytscope dashboard:
//! - HTTP client authenticated with a static API key
//! - JSON parsers that tolerate the API's missing and optional fields
//! - High-level API for single channel lookups, best-effort channel
//!   batches and paginated upload listings
//!
//! # Example
//!
//! ```no_run
//! use ytscope_core::{ClientConfig, Result, YoutubeService, parse_channel_ids};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let service = YoutubeService::with_config(ClientConfig::from_env()?)?;
//!
//!     // Channel table, failures skipped
//!     let ids = parse_channel_ids("UC_x5XG1OV2P6uZZ5FSM9Ttw, UCVHFbqXqoYvEWM1Ddxl0QDg");
//!     for channel in service.extract_channels(&ids).await {
//!         println!("{:?}: {} videos", channel.title, channel.video_count);
//!     }
//!
//!     // Every upload of one channel, 50 per request
//!     let videos = service.fetch_all_videos("UC_x5XG1OV2P6uZZ5FSM9Ttw").await?;
//!     println!("{} uploads", videos.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every failure is a [`YoutubeError`]. Branch on [`YoutubeError::kind`]
//! and show its `Display` text to the user.
//!
//! **Quota:** each `fetch_all_videos` call costs two API units per 50
//! uploads plus one for the uploads lookup. Nothing is cached.

mod client;
mod error;
pub mod parser;
mod service;
mod types;
pub mod url;

// Re-export client types
pub use client::{API_KEY_ENV, ClientConfig, YoutubeClient};

// Re-export error types
pub use error::{ErrorKind, Result, YoutubeError};

// Re-export raw API resources
pub use parser::Channel;

// Re-export main service API
pub use service::{YoutubeService, create_client};

// Re-export data types
pub use types::{ChannelBatch, ChannelRecord, SkippedChannel, VideoRecord};

// Re-export URL helper functions for convenience
pub use url::{extract_channel_id, parse_channel_ids};
