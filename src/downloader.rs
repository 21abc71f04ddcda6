use log::{info, warn};
use std::{collections::HashSet, fmt, path::PathBuf, time::Duration};

use crate::clients::{
    AudioFetcher, LocalStorage, PlaylistSource, SpotifyClient, VideoSearch, YouTubeClient, YtDlp,
    entities::Track,
    errors::Result,
    spotify::fetch_playlist_tracks,
    ytdlp::AUDIO_EXTENSION,
};
use crate::config::Settings;

/// Terminal state of a single track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    /// Output file existed before the run started.
    Skipped,
    /// Search returned nothing or failed.
    NoMatch,
    /// Audio file written.
    Done { url: String },
    /// A match was found but fetching or transcoding failed.
    Failed { url: String },
}

/// Per-track results of one run, in playlist order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<(Track, TrackOutcome)>,
}

impl RunReport {
    fn count(&self, pred: impl Fn(&TrackOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, TrackOutcome::Skipped))
    }

    pub fn no_match(&self) -> usize {
        self.count(|o| matches!(o, TrackOutcome::NoMatch))
    }

    pub fn done(&self) -> usize {
        self.count(|o| matches!(o, TrackOutcome::Done { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, TrackOutcome::Failed { .. }))
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} downloaded, {} skipped, {} without match, {} failed",
            self.done(),
            self.skipped(),
            self.no_match(),
            self.failed()
        )
    }
}

/// Builds the production clients from [`Settings`].
pub struct ConfigBuilder {
    settings: Settings,
    output_dir: Option<PathBuf>,
    delay: Option<Duration>,
}

impl ConfigBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            output_dir: None,
            delay: None, // Pause before each download. Default is 2 seconds.
        }
    }

    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn build(self) -> Downloader<SpotifyClient, YouTubeClient, YtDlp> {
        let settings = self.settings;
        let spotify = SpotifyClient::with_credentials(
            &settings.spotify_client_id,
            &settings.spotify_client_secret,
        );
        let youtube =
            YouTubeClient::with_base_url(settings.youtube_api_key, settings.youtube_api_base_url);
        let mut fetcher = YtDlp::new(settings.ytdlp_path);
        if let Some(delay) = self.delay {
            fetcher = fetcher.with_delay(delay);
        }
        let storage = LocalStorage::new(self.output_dir.unwrap_or_else(|| PathBuf::from(".")));
        Downloader::new(spotify, youtube, fetcher, storage)
    }
}

/// Sequential playlist → search → fetch pipeline.
pub struct Downloader<P, S, F> {
    pub source: P,
    pub search: S,
    pub fetcher: F,
    pub storage: LocalStorage,
}

impl<P, S, F> Downloader<P, S, F>
where
    P: PlaylistSource,
    S: VideoSearch,
    F: AudioFetcher,
{
    pub fn new(source: P, search: S, fetcher: F, storage: LocalStorage) -> Self {
        Downloader {
            source,
            search,
            fetcher,
            storage,
        }
    }

    /// Process every track of `playlist` in order and report each outcome.
    pub async fn run(&self, playlist: &str) -> Result<RunReport> {
        let tracks = fetch_playlist_tracks(&self.source, playlist).await?;
        if tracks.is_empty() {
            warn!("Playlist has no downloadable tracks.");
            return Ok(RunReport::default());
        }

        // Read once; files written during this run are not added
        let downloaded = self.storage.downloaded_names().await?;
        info!("Found {} existing MP3 files to skip.", downloaded.len());

        let total = tracks.len();
        let mut report = RunReport::default();
        for (i, track) in tracks.into_iter().enumerate() {
            let outcome = self.process_track(&track, i + 1, total, &downloaded).await;
            report.outcomes.push((track, outcome));
        }

        info!("--- Download process complete! ({report}) ---");
        Ok(report)
    }

    async fn process_track(
        &self,
        track: &Track,
        position: usize,
        total: usize,
        downloaded: &HashSet<String>,
    ) -> TrackOutcome {
        let full_name = track.full_name();
        let file_stem = track.file_stem();

        if downloaded.contains(&file_stem) {
            info!("[{position}/{total}] SKIP: '{full_name}' already exists.");
            return TrackOutcome::Skipped;
        }
        info!("[{position}/{total}] Processing: {full_name}");

        let url = match self.search.best_match(&track.search_query).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                info!("  -> No suitable YouTube video found for '{full_name}'. Skipping.");
                return TrackOutcome::NoMatch;
            }
            Err(e) => {
                warn!("  -> Error searching YouTube for '{}': {e}", track.search_query);
                return TrackOutcome::NoMatch;
            }
        };
        info!("  -> Found YouTube match: {url}");

        match self.fetcher.fetch(&url, self.storage.dir(), &file_stem).await {
            Ok(()) => {
                info!("  -> Successfully downloaded and saved as '{file_stem}.{AUDIO_EXTENSION}'");
                TrackOutcome::Done { url }
            }
            Err(e) => {
                warn!("  -> Failed to download/convert '{full_name}': {e}");
                TrackOutcome::Failed { url }
            }
        }
    }
}
