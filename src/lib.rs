//! Playlist-dl - Download a Spotify playlist as MP3 files
//!
//! Each playlist track is matched against YouTube with a single search and the
//! top result is fetched and transcoded with yt-dlp. Tracks whose MP3 already
//! exists in the output directory are skipped.

/// Client modules for interacting with external services and local storage
pub mod clients;
/// Credentials and endpoints loaded from the environment
pub mod config;
/// The per-track download pipeline
pub mod downloader;
/// Filename sanitization
pub mod filenames;
