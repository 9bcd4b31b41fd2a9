pub mod parsers;
pub mod resolver;

pub use parsers::extract_track_id;
pub use resolver::{
    MockTrackResolver, StaticTrackResolver, Suppressed, TrackResolver, TrackSource, lookup,
};
