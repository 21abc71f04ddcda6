use log::debug;
use serde::Deserialize;

use crate::clients::{
    VideoSearch,
    errors::{Error, Result},
};

/// Public YouTube Data API v3 endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

#[derive(Deserialize, Debug)]
struct VideoId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Deserialize, Debug)]
struct SearchItem {
    id: VideoId,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

/// Searches YouTube for a single best-ranked video.
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_BASE_URL)
    }

    /// Client against a custom endpoint, e.g. a local mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        YouTubeClient {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl VideoSearch for YouTubeClient {
    async fn best_match(&self, query: &str) -> Result<Option<String>> {
        debug!("Searching YouTube for {query:?}");
        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", "1"),
                ("q", query),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::YouTubeApiError {
                status: status.as_u16(),
                body,
            });
        }

        let results: SearchResponse = response.json().await?;
        Ok(results
            .items
            .into_iter()
            .next()
            .map(|item| format!("{WATCH_URL}{}", item.id.video_id)))
    }
}
