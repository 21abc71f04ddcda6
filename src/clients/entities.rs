use crate::filenames::sanitize_filename;

/// A playlist entry as listed by the catalog, before any derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTrack {
    pub name: String,
    pub artists: Vec<String>,
}

/// One page of a playlist listing.
#[derive(Debug, Clone, Default)]
pub struct PlaylistPage {
    /// Entries in playlist order. `None` marks an item without a track payload.
    pub items: Vec<Option<CatalogTrack>>,
    /// Offset of the following page, if any.
    pub next: Option<u32>,
}

/// Track descriptor used for searching and naming the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String, // comma-joined list
    pub search_query: String,
}

impl Track {
    /// `"{artist} - {name}"`, as printed in progress lines.
    pub fn full_name(&self) -> String {
        format!("{} - {}", self.artist, self.name)
    }

    /// Base filename (without extension) of the audio file for this track.
    pub fn file_stem(&self) -> String {
        sanitize_filename(&self.full_name())
    }
}

impl From<CatalogTrack> for Track {
    fn from(t: CatalogTrack) -> Track {
        let artist = t.artists.join(", ");
        let search_query = format!("{} {artist} audio", t.name);
        Track {
            name: t.name,
            artist,
            search_query,
        }
    }
}
