use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Canonical identifier of a track, an ASCII alphanumeric run taken from a locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Wraps an already extracted id. Returns `None` when `raw` is empty or
    /// contains anything other than ASCII letters and digits.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for TrackId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for TrackId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Popularity score, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Popularity(u8);

impl Popularity {
    pub const MAX: u8 = 100;

    pub fn new(score: u8) -> Self {
        Self(score.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Popularity {
    fn from(score: u8) -> Self {
        Self::new(score)
    }
}

impl From<Popularity> for u8 {
    fn from(popularity: Popularity) -> Self {
        popularity.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
    pub height: u32,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub images: Vec<AlbumImage>,
}

impl Album {
    pub fn cover(&self) -> Option<&AlbumImage> {
        self.images.first()
    }
}

/// Resolved metadata for a single track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artists: Vec<Artist>,
    pub album: Album,
    pub duration_ms: u64,
    pub canonical_url: String,
    pub preview_url: Option<String>,
    pub popularity: Popularity,
}

impl Track {
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
