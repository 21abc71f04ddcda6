use std::path::Path;

use crate::clients::{
    entities::PlaylistPage,
    errors::Result,
};

/// Data entities for tracks and playlist pages
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Existing-file index over the output directory
pub mod local_storage;
/// Spotify API client
pub mod spotify;
/// YouTube Data API search client
pub mod youtube;
/// yt-dlp audio fetcher
pub mod ytdlp;

pub use local_storage::LocalStorage;
pub use spotify::SpotifyClient;
pub use youtube::YouTubeClient;
pub use ytdlp::YtDlp;

/// Paginated playlist listing.
#[allow(async_fn_in_trait)]
pub trait PlaylistSource {
    /// Obtain an access token. Called once before any page is requested.
    async fn authorize(&self) -> Result<()>;

    /// Fetch the page of `playlist_id` starting at `offset`.
    async fn page(&self, playlist_id: &str, offset: u32) -> Result<PlaylistPage>;
}

/// Single best-match video search.
#[allow(async_fn_in_trait)]
pub trait VideoSearch {
    /// Returns a playable URL for the top result, or `None` when nothing matched.
    async fn best_match(&self, query: &str) -> Result<Option<String>>;
}

/// Fetches media and transcodes it into an audio file.
#[allow(async_fn_in_trait)]
pub trait AudioFetcher {
    /// Download `url` into `<dir>/<file_stem>.<ext>`.
    async fn fetch(&self, url: &str, dir: &Path, file_stem: &str) -> Result<()>;
}
