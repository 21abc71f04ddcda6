use log::{debug, warn};
use std::{
    collections::HashSet,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::clients::{errors::Result, ytdlp::AUDIO_EXTENSION};

/// Output directory holding previously downloaded tracks.
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        LocalStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stems of every audio file already present in the directory.
    ///
    /// A missing directory yields an empty set.
    pub async fn downloaded_names(&self) -> Result<HashSet<String>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Download directory {:?} not found.", self.dir);
                return Ok(HashSet::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = HashSet::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == AUDIO_EXTENSION)
                && let Some(stem) = path.file_stem()
            {
                names.insert(stem.to_string_lossy().into_owned());
            }
        }
        debug!("Indexed {} audio files in {:?}", names.len(), self.dir);
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn indexes_only_mp3_stems() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Artist_-_Song.mp3", "notes.txt", "Other_-_Tune.mp3", "clip.webm"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("folder.mp3.d")).unwrap();

        let names = LocalStorage::new(dir.path()).downloaded_names().await.unwrap();
        let mut names: Vec<_> = names.into_iter().collect();
        names.sort();
        assert_eq!(names, ["Artist_-_Song", "Other_-_Tune"]);
    }

    #[tokio::test]
    async fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("missing"));
        assert!(storage.downloaded_names().await.unwrap().is_empty());
    }
}
