use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Duration,
};

use clap::{Parser, Subcommand};
use log::{info, warn};
use playlist_dl::{
    clients::errors::{Error, Result},
    config::Settings,
    downloader::ConfigBuilder,
};

#[derive(Parser)]
#[command(name = "playlist-dl")]
#[command(version, about = "Download a Spotify playlist as MP3 files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download every track of a playlist that is not already present
    Download {
        /// Spotify playlist URI or URL. Prompted for when omitted.
        playlist: Option<String>,

        /// Directory holding the MP3 files
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Seconds to wait before each download
        #[arg(long, default_value_t = 2)]
        delay_secs: u64,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Download {
            playlist,
            output_dir,
            delay_secs,
        } => download(playlist, output_dir, Duration::from_secs(delay_secs)).await,
    }
}

/// One-line diagnostic for an error that ends the run.
pub fn diagnostic(err: &Error) -> String {
    match err {
        Error::ConfigurationError(_) => format!(
            "FATAL ERROR: {err} Set RSPOTIFY_CLIENT_ID, RSPOTIFY_CLIENT_SECRET and YOUTUBE_API_KEY."
        ),
        Error::InvalidPlaylist(_) | Error::SpotifyError(_) => format!(
            "Could not retrieve tracks: {err}. Check your playlist URI and API keys."
        ),
        _ => err.to_string(),
    }
}

fn prompt_playlist() -> Result<String> {
    print!("Enter the Spotify Playlist URL or URI: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

async fn download(playlist: Option<String>, output_dir: PathBuf, delay: Duration) -> Result<()> {
    info!("--- Spotify Playlist to MP3 Downloader ---");
    let settings = Settings::from_env()?;

    let playlist = match playlist {
        Some(p) => p.trim().to_string(),
        None => prompt_playlist()?,
    };
    if playlist.is_empty() {
        info!("No URI provided. Exiting.");
        return Ok(());
    }

    let downloader = ConfigBuilder::new(settings)
        .output_dir(output_dir)
        .delay(delay)
        .build();
    if !downloader.fetcher.is_available().await {
        warn!("yt-dlp could not be executed. Downloads will fail until it is installed.");
    }

    downloader.run(&playlist).await.map(|_| ())
}
