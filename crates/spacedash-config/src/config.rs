use serde::{Deserialize, Serialize};

pub const DEFAULT_TRACK_URL: &str =
    "https://open.spotify.com/track/5bQ1qgqZhpCS9RQCUZaqBO?si=UVvlYxxbSjuhQqy-39ZrrA";
pub const DEFAULT_URL_PREFIX: &str = spacedash_core::SPOTIFY_TRACK_URL_PREFIX;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackConfig {
    pub url: Option<String>,
    pub url_prefix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    pub initial_fuel: u8,
    pub fuel_step: u8,
    pub low_fuel_threshold: u8,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            initial_fuel: 75,
            fuel_step: 10,
            low_fuel_threshold: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    pub simple: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashConfig {
    pub track: TrackConfig,
    pub mission: MissionConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}
