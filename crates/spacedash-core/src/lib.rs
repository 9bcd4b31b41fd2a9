mod duration;
mod error;
mod track;

pub use duration::format_duration;
pub use error::{DashError, DashResult};
pub use track::{Album, AlbumImage, Artist, Popularity, Track, TrackId};

pub const SPOTIFY_TRACK_URL_PREFIX: &str = "https://open.spotify.com/track/";

pub fn validate_url(url: &str) -> DashResult<()> {
    url::Url::parse(url).map_err(|err| DashError::InvalidInput(format!("invalid url: {err}")))?;
    Ok(())
}
