use std::{path::Path, process::Stdio, time::Duration};

use log::debug;
use tokio::process::Command;

use crate::clients::{
    AudioFetcher,
    errors::{Error, Result},
};

/// Extension of the files yt-dlp produces.
pub const AUDIO_EXTENSION: &str = "mp3";
const AUDIO_QUALITY: &str = "192K";
const DEFAULT_DELAY: Duration = Duration::from_secs(2);

const FFMPEG_HINT: &str =
    "HINT: Ensure yt-dlp and FFmpeg (ffmpeg and ffprobe) are installed and on the system PATH.";

/// Fetches the best available audio with yt-dlp and converts it to MP3 via FFmpeg.
pub struct YtDlp {
    program: String,
    delay: Duration,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

impl YtDlp {
    pub fn new(program: impl Into<String>) -> Self {
        YtDlp {
            program: program.into(),
            delay: DEFAULT_DELAY,
        }
    }

    /// Pause applied before every download.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Whether the configured yt-dlp binary can be executed.
    pub async fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
    }

    fn args(url: &str, dir: &Path, file_stem: &str) -> Vec<String> {
        let template = dir.join(format!("{file_stem}.%(ext)s"));
        vec![
            "--format".into(),
            "bestaudio/best".into(),
            "--extract-audio".into(),
            "--audio-format".into(),
            AUDIO_EXTENSION.into(),
            "--audio-quality".into(),
            AUDIO_QUALITY.into(),
            "--sleep-requests".into(),
            "1".into(),
            "--no-warnings".into(),
            "--no-playlist".into(),
            "--output".into(),
            template.to_string_lossy().into_owned(),
            url.into(),
        ]
    }
}

impl AudioFetcher for YtDlp {
    async fn fetch(&self, url: &str, dir: &Path, file_stem: &str) -> Result<()> {
        tokio::time::sleep(self.delay).await;

        debug!("Running {} for {url}", self.program);
        let output = Command::new(&self.program)
            .args(Self::args(url, dir, file_stem))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                Error::DownloadError(format!("could not run {}: {e}. {FFMPEG_HINT}", self.program))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::DownloadError(format!(
                "{} exited with {}: {}. {FFMPEG_HINT}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}
