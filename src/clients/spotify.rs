use log::{debug, info};

use crate::clients::{
    PlaylistSource,
    entities::{CatalogTrack, PlaylistPage, Track},
    errors::{Error, Result},
};
use rspotify::{
    ClientCredsSpotify, Credentials,
    model::{PlayableItem, PlaylistId, PlaylistItem},
    prelude::*,
};

// Spotify caps playlist item pages at 100
const PAGE_SIZE: u32 = 100;

/// Extract the playlist id from a `spotify:playlist:<id>` URI or an
/// `https://open.spotify.com/playlist/<id>?si=...` URL.
pub fn parse_playlist_id(reference: &str) -> Result<String> {
    if !reference.contains("playlist") {
        return Err(Error::InvalidPlaylist(reference.to_string()));
    }
    let last_segment = reference
        .rsplit(':')
        .next()
        .and_then(|s| s.rsplit('/').next())
        .unwrap_or_default();
    let id = last_segment.split('?').next().unwrap_or_default();
    if id.is_empty() {
        return Err(Error::InvalidPlaylist(reference.to_string()));
    }
    Ok(id.to_string())
}

/// Read every track of a playlist, following pages until the source reports no next page.
pub async fn fetch_playlist_tracks<S: PlaylistSource>(
    source: &S,
    reference: &str,
) -> Result<Vec<Track>> {
    let playlist_id = parse_playlist_id(reference)?;
    info!("Connecting to Spotify...");
    source.authorize().await?;

    let mut items = Vec::new();
    let mut offset = 0;
    loop {
        let page = source.page(&playlist_id, offset).await?;
        debug!("Fetched {} playlist items at offset {offset}", page.items.len());
        items.extend(page.items);
        match page.next {
            Some(next) if next > offset => offset = next,
            _ => break,
        }
    }

    let tracks: Vec<Track> = items.into_iter().flatten().map(Track::from).collect();
    info!("Found {} tracks in the playlist.", tracks.len());
    Ok(tracks)
}

fn catalog_track(item: PlaylistItem) -> Option<CatalogTrack> {
    match item.track? {
        PlayableItem::Track(t) => Some(CatalogTrack {
            name: t.name,
            artists: t.artists.into_iter().map(|a| a.name).collect(),
        }),
        // Podcast episodes have no artist list to search with
        _ => None,
    }
}

/// Playlist reader authenticated with the client-credentials flow.
pub struct SpotifyClient {
    /// Underlying rspotify client
    pub spotify: ClientCredsSpotify,
}

impl SpotifyClient {
    pub fn new(spotify: ClientCredsSpotify) -> Self {
        SpotifyClient { spotify }
    }

    /// Client for the public Spotify Web API.
    pub fn with_credentials(client_id: &str, client_secret: &str) -> Self {
        let creds = Credentials::new(client_id, client_secret);
        Self::new(ClientCredsSpotify::new(creds))
    }
}

impl PlaylistSource for SpotifyClient {
    async fn authorize(&self) -> Result<()> {
        debug!("Requesting Spotify client credentials token ...");
        self.spotify.request_token().await?;
        Ok(())
    }

    async fn page(&self, playlist_id: &str, offset: u32) -> Result<PlaylistPage> {
        let id = PlaylistId::from_id(playlist_id)
            .map_err(|_| Error::InvalidPlaylist(playlist_id.to_string()))?;
        let page = self
            .spotify
            .playlist_items_manual(id, None, None, Some(PAGE_SIZE), Some(offset))
            .await?;
        let next = page.next.as_ref().map(|_| page.offset + page.limit);
        Ok(PlaylistPage {
            items: page.items.into_iter().map(catalog_track).collect(),
            next,
        })
    }
}
