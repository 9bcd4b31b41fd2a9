mod track;

pub use track::extract_track_id;
