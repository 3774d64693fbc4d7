//! Prints a channel table and upload count for channels given on the command line
//!
//! ```text
//! YOUTUBE_API_KEY=... RUST_LOG=ytscope_core=debug \
//!     cargo run --example channel_report -- "UC_x5XG1OV2P6uZZ5FSM9Ttw, UCVHFbqXqoYvEWM1Ddxl0QDg"
//! ```

use tracing_subscriber::EnvFilter;
use ytscope_core::{ClientConfig, YoutubeService, parse_channel_ids};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let input = std::env::args().skip(1).collect::<Vec<_>>().join(",");
    let ids = parse_channel_ids(&input);
    if ids.is_empty() {
        eprintln!("usage: channel_report <channel id>[,<channel id>...]");
        return Ok(());
    }

    let service = YoutubeService::with_config(ClientConfig::from_env()?)?;

    let batch = service.extract_channels_with_report(&ids).await;
    println!("{:<26} {:>12} {:>8} {:>14}  Name", "Channel ID", "Subscribers", "Videos", "Views");
    for channel in &batch.records {
        println!(
            "{:<26} {:>12} {:>8} {:>14}  {}",
            channel.channel_id,
            channel.subscriber_count,
            channel.video_count,
            channel.view_count,
            channel.title.as_deref().unwrap_or("-")
        );
    }
    for skipped in &batch.skipped {
        println!("skipped {}: {}", skipped.channel_id, skipped.reason);
    }

    if let Some(first) = batch.records.first() {
        match service.fetch_all_videos(&first.channel_id).await {
            Ok(videos) => {
                let views: u64 = videos.iter().map(|v| v.view_count).sum();
                println!("\n{} uploads of {} with {} views in total", videos.len(), first.channel_id, views);
            }
            Err(e) => println!("\nCould not list uploads: {}", e),
        }
    }

    Ok(())
}
