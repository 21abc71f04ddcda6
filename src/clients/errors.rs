use rspotify::ClientError;
use thiserror::Error;

/// Result alias used by every client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading the playlist, searching or downloading.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or placeholder settings.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The input is not a playlist URI or URL.
    #[error("Invalid Spotify playlist URI or URL: {0}")]
    InvalidPlaylist(String),

    /// Authentication or API failure from rspotify.
    #[error("Spotify error: {0}")]
    SpotifyError(#[from] ClientError),

    /// Transport or decoding failure talking to YouTube.
    #[error("YouTube search request failed: {0}")]
    SearchError(#[from] reqwest::Error),

    /// Non-success HTTP status from the YouTube API.
    #[error("YouTube API unexpected response ({status}): {body}")]
    YouTubeApiError {
        /// HTTP status code
        status: u16,
        /// Response body, usually a JSON error document
        body: String,
    },

    /// yt-dlp could not be run or exited unsuccessfully.
    #[error("Download failed: {0}")]
    DownloadError(String),

    /// Filesystem or terminal failure.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

