use std::collections::HashMap;

use async_trait::async_trait;
use spacedash_core::{
    Album, AlbumImage, Artist, DashResult, Popularity, SPOTIFY_TRACK_URL_PREFIX, Track, TrackId,
    validate_url,
};
use tracing::{debug, warn};

use crate::parsers::extract_track_id;

const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/300x300/1db954/ffffff?text=Album+Art";

/// Turns a track id into track metadata.
///
/// `None` is the only negative outcome. Implementations that can fail
/// internally should log the failure and return `None`; see [`Suppressed`].
#[async_trait]
pub trait TrackResolver: Send + Sync {
    async fn resolve(&self, id: &TrackId) -> Option<Track>;
}

/// A lookup backend that reports its own failures.
#[async_trait]
pub trait TrackSource: Send + Sync {
    async fn fetch(&self, id: &TrackId) -> DashResult<Option<Track>>;
}

/// Adapts a [`TrackSource`] to [`TrackResolver`], logging errors and
/// reporting them as absence.
#[derive(Debug, Clone)]
pub struct Suppressed<S> {
    source: S,
}

impl<S: TrackSource> Suppressed<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S: TrackSource> TrackResolver for Suppressed<S> {
    async fn resolve(&self, id: &TrackId) -> Option<Track> {
        match self.source.fetch(id).await {
            Ok(track) => track,
            Err(err) => {
                warn!(track_id = %id, error = %err, "track lookup failed");
                None
            }
        }
    }
}

/// Synthesizes placeholder metadata for any id.
#[derive(Debug, Clone)]
pub struct MockTrackResolver {
    url_prefix: String,
}

impl MockTrackResolver {
    pub fn new(url_prefix: impl Into<String>) -> DashResult<Self> {
        let url_prefix = url_prefix.into();
        validate_url(&url_prefix)?;
        Ok(Self { url_prefix })
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    fn placeholder(&self, id: &TrackId) -> Track {
        Track {
            id: id.clone(),
            title: "Sample Track".to_string(),
            artists: vec![Artist {
                id: "artist123".to_string(),
                name: "Sample Artist".to_string(),
            }],
            album: Album {
                id: "album123".to_string(),
                title: "Sample Album".to_string(),
                images: vec![AlbumImage {
                    url: PLACEHOLDER_COVER.to_string(),
                    height: 300,
                    width: 300,
                }],
            },
            duration_ms: 180_000,
            canonical_url: format!("{}{}", self.url_prefix, id),
            preview_url: None,
            popularity: Popularity::new(75),
        }
    }
}

impl Default for MockTrackResolver {
    fn default() -> Self {
        Self {
            url_prefix: SPOTIFY_TRACK_URL_PREFIX.to_string(),
        }
    }
}

#[async_trait]
impl TrackResolver for MockTrackResolver {
    async fn resolve(&self, id: &TrackId) -> Option<Track> {
        debug!(track_id = %id, "synthesizing placeholder track");
        Some(self.placeholder(id))
    }
}

/// Fixed in-memory catalogue. Unknown ids resolve to `None`.
#[derive(Debug, Clone, Default)]
pub struct StaticTrackResolver {
    tracks: HashMap<TrackId, Track>,
}

impl StaticTrackResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.insert(track.id.clone(), track);
        self
    }
}

impl FromIterator<Track> for StaticTrackResolver {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with_track)
    }
}

#[async_trait]
impl TrackResolver for StaticTrackResolver {
    async fn resolve(&self, id: &TrackId) -> Option<Track> {
        self.tracks.get(id).cloned()
    }
}

/// Extracts the id from `locator` and resolves it. A locator without a
/// track id never reaches the resolver.
pub async fn lookup(resolver: &dyn TrackResolver, locator: &str) -> Option<Track> {
    let Some(id) = extract_track_id(locator) else {
        debug!(locator, "no track id in locator");
        return None;
    };
    resolver.resolve(&id).await
}
