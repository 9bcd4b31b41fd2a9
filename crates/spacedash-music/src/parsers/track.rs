use std::sync::LazyLock;

use regex::Regex;
use spacedash_core::TrackId;

static TRACK_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/track/([a-zA-Z0-9]+)").expect("track pattern is valid"));

/// Pulls the id out of the first `/track/<id>` segment in `input`.
///
/// Absence is an ordinary outcome for malformed locators, not an error.
pub fn extract_track_id(input: &str) -> Option<TrackId> {
    let captures = TRACK_PATH.captures(input)?;
    captures.get(1).and_then(|m| TrackId::new(m.as_str()))
}
