mod config;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::DashConfig;
use spacedash_core::{DashError, DashResult};

pub use config::{
    DEFAULT_TRACK_URL, DEFAULT_URL_PREFIX, DashConfig as DashConfigData, LoggingConfig,
    MissionConfig, OutputConfig, TrackConfig,
};

pub fn config_path() -> DashResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DashError::Config("home directory not found".to_string()))?;
    Ok(home.join(".spacedash").join("config.toml"))
}

pub fn load_config() -> DashResult<DashConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> DashResult<DashConfig> {
    if !path.exists() {
        return Ok(DashConfig::default());
    }
    let content = fs::read_to_string(path)
        .map_err(|err| DashError::Config(format!("failed to read config: {err}")))?;
    let config = toml::from_str(&content)
        .map_err(|err| DashError::Config(format!("failed to parse config: {err}")))?;
    Ok(config)
}

pub fn save_config(config: &DashConfig) -> DashResult<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &DashConfig) -> DashResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| DashError::Config(format!("failed to create config dir: {err}")))?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|err| DashError::Config(format!("failed to serialize config: {err}")))?;
    fs::write(path, content)
        .map_err(|err| DashError::Config(format!("failed to write config: {err}")))?;
    Ok(())
}

pub fn config_exists() -> DashResult<bool> {
    let path = config_path()?;
    Ok(path.exists())
}

fn env_override(name: &str) -> Option<String> {
    env::var(name).ok()
}

pub fn resolve_track_url(config: &DashConfig) -> String {
    track_url_from(env_override("SPACEDASH_TRACK_URL").as_deref(), config)
}

fn track_url_from(env_value: Option<&str>, config: &DashConfig) -> String {
    non_blank(env_value)
        .or(config.track.url.as_deref())
        .unwrap_or(DEFAULT_TRACK_URL)
        .to_string()
}

pub fn resolve_url_prefix(config: &DashConfig) -> String {
    config
        .track
        .url_prefix
        .clone()
        .unwrap_or_else(|| DEFAULT_URL_PREFIX.to_string())
}

pub fn resolve_simple_output(config: &DashConfig) -> Option<bool> {
    simple_output_from(env_override("SPACEDASH_OUTPUT_SIMPLE").as_deref(), config)
}

fn simple_output_from(env_value: Option<&str>, config: &DashConfig) -> Option<bool> {
    if let Some(value) = non_blank(env_value) {
        let normalized = value.trim().to_lowercase();
        return Some(normalized == "1" || normalized == "true" || normalized == "yes");
    }
    config.output.simple
}

pub fn resolve_log_level(config: &DashConfig) -> String {
    log_level_from(env_override("SPACEDASH_LOG").as_deref(), config)
}

fn log_level_from(env_value: Option<&str>, config: &DashConfig) -> String {
    non_blank(env_value)
        .or(config.logging.level.as_deref())
        .unwrap_or("warn")
        .to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// Reads a dotted key such as `mission.fuel_step` for display.
pub fn get_config_value(config: &DashConfig, key_path: &str) -> Option<String> {
    let parts: Vec<&str> = key_path.split('.').collect();

    match parts.as_slice() {
        ["track", "url"] => config.track.url.clone(),
        ["track", "url_prefix"] => config.track.url_prefix.clone(),
        ["mission", "initial_fuel"] => Some(config.mission.initial_fuel.to_string()),
        ["mission", "fuel_step"] => Some(config.mission.fuel_step.to_string()),
        ["mission", "low_fuel_threshold"] => Some(config.mission.low_fuel_threshold.to_string()),
        ["output", "simple"] => config.output.simple.map(|b| b.to_string()),
        ["logging", "level"] => config.logging.level.clone(),
        _ => None,
    }
}

pub fn set_config_value(key_path: &str, value: &str) -> DashResult<()> {
    set_config_value_at(&config_path()?, key_path, value)
}

/// Writes a dotted key into the TOML file at `path`, keeping the rest of the
/// document (comments and ordering included) as is.
pub fn set_config_value_at(path: &Path, key_path: &str, value: &str) -> DashResult<()> {
    let content = if path.exists() {
        fs::read_to_string(path)
            .map_err(|err| DashError::Config(format!("failed to read config: {err}")))?
    } else {
        String::new()
    };

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|err| DashError::Config(format!("failed to parse config: {err}")))?;

    let parts: Vec<&str> = key_path.split('.').collect();
    let Some((last_part, parents)) = parts.split_last().filter(|(_, parents)| !parents.is_empty())
    else {
        return Err(DashError::Config(
            "key path must have at least 2 parts (e.g., 'track.url')".to_string(),
        ));
    };

    let mut current = doc.as_table_mut();
    for part in parents {
        current = current
            .entry(part)
            .or_insert(toml_edit::Item::Table(Default::default()))
            .as_table_mut()
            .ok_or_else(|| {
                DashError::Config(format!("cannot set nested value in '{}'", key_path))
            })?;
    }

    current[*last_part] = typed_value(key_path, value)?;

    let content = doc.to_string();
    // Reject edits that would leave the file unreadable by `load_config`.
    toml::from_str::<DashConfig>(&content)
        .map_err(|err| DashError::Config(format!("invalid value for '{key_path}': {err}")))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| DashError::Config(format!("failed to create config dir: {err}")))?;
    }
    fs::write(path, content)
        .map_err(|err| DashError::Config(format!("failed to write config: {err}")))?;

    Ok(())
}

enum ValueKind {
    Text,
    Integer,
    Flag,
}

fn value_kind(key_path: &str) -> ValueKind {
    match key_path.split('.').collect::<Vec<_>>().as_slice() {
        ["mission", _] => ValueKind::Integer,
        ["output", "simple"] => ValueKind::Flag,
        _ => ValueKind::Text,
    }
}

fn typed_value(key_path: &str, raw: &str) -> DashResult<toml_edit::Item> {
    match value_kind(key_path) {
        ValueKind::Text => Ok(toml_edit::value(raw)),
        ValueKind::Integer => raw
            .trim()
            .parse::<i64>()
            .map(toml_edit::value)
            .map_err(|err| DashError::Config(format!("invalid value for '{key_path}': {err}"))),
        ValueKind::Flag => raw
            .trim()
            .parse::<bool>()
            .map(toml_edit::value)
            .map_err(|err| DashError::Config(format!("invalid value for '{key_path}': {err}"))),
    }
}

pub fn open_in_editor() -> DashResult<()> {
    let path = config_path()?;
    if !path.exists() {
        save_config(&DashConfig::default())?;
    }

    let editor = env::var("EDITOR").unwrap_or_else(|_| {
        if cfg!(target_os = "macos") {
            "vim".to_string()
        } else if cfg!(target_os = "windows") {
            "notepad".to_string()
        } else {
            "nano".to_string()
        }
    });

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|err| DashError::Config(format!("failed to open editor '{}': {}", editor, err)))?;

    if !status.success() {
        return Err(DashError::Config(format!(
            "editor exited with status: {}",
            status
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.mission.initial_fuel, 75);
        assert_eq!(config.mission.fuel_step, 10);
        assert_eq!(config.mission.low_fuel_threshold, 20);
        assert!(config.track.url.is_none());
    }

    #[test]
    fn partial_tables_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[mission]\nfuel_step = 25\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.mission.fuel_step, 25);
        assert_eq!(config.mission.initial_fuel, 75);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[mission\n").unwrap();

        match load_config_from(&path) {
            Err(DashError::Config(msg)) => assert!(msg.contains("failed to parse config")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = DashConfig::default();
        config.track.url = Some("https://open.spotify.com/track/abc".to_string());
        config.output.simple = Some(true);

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.track.url, config.track.url);
        assert_eq!(loaded.output.simple, Some(true));
    }

    #[test]
    fn set_value_writes_typed_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        set_config_value_at(&path, "mission.fuel_step", "5").unwrap();
        set_config_value_at(&path, "output.simple", "true").unwrap();
        set_config_value_at(&path, "track.url", "https://open.spotify.com/track/xyz").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.mission.fuel_step, 5);
        assert_eq!(config.output.simple, Some(true));
        assert_eq!(
            get_config_value(&config, "track.url").as_deref(),
            Some("https://open.spotify.com/track/xyz")
        );
    }

    #[test]
    fn set_value_requires_dotted_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = set_config_value_at(&dir.path().join("config.toml"), "simple", "true");
        assert!(matches!(result, Err(DashError::Config(_))));
    }

    #[test]
    fn set_value_rejects_out_of_range_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let result = set_config_value_at(&path, "mission.initial_fuel", "400");
        assert!(matches!(result, Err(DashError::Config(_))));
        assert!(!path.exists());
    }

    #[test]
    fn set_value_refuses_to_rewrite_unparsable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let original = "[track]\nurl = \"https://open.spotify.com/track/keepme\"\n[mission\n";
        fs::write(&path, original).unwrap();

        match set_config_value_at(&path, "mission.fuel_step", "5") {
            Err(DashError::Config(msg)) => assert!(msg.contains("failed to parse config")),
            other => panic!("Expected Config error, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn set_value_keeps_numeric_text_as_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        set_config_value_at(&path, "logging.level", "123").unwrap();
        set_config_value_at(&path, "track.url", "true").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("123"));
        assert_eq!(config.track.url.as_deref(), Some("true"));
    }

    #[test]
    fn set_value_rejects_mistyped_numbers_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(matches!(
            set_config_value_at(&path, "mission.fuel_step", "lots"),
            Err(DashError::Config(_))
        ));
        assert!(matches!(
            set_config_value_at(&path, "output.simple", "maybe"),
            Err(DashError::Config(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn track_url_prefers_env_then_config_then_default() {
        let mut config = DashConfig::default();
        assert_eq!(track_url_from(None, &config), DEFAULT_TRACK_URL);

        config.track.url = Some("https://open.spotify.com/track/fromconfig".to_string());
        assert_eq!(
            track_url_from(None, &config),
            "https://open.spotify.com/track/fromconfig"
        );
        assert_eq!(
            track_url_from(Some("https://open.spotify.com/track/fromenv"), &config),
            "https://open.spotify.com/track/fromenv"
        );
        assert_eq!(
            track_url_from(Some("   "), &config),
            "https://open.spotify.com/track/fromconfig"
        );
    }

    #[test]
    fn simple_output_env_values() {
        let mut config = DashConfig::default();
        assert_eq!(simple_output_from(None, &config), None);

        for truthy in ["1", "yes", "TRUE", " true "] {
            assert_eq!(simple_output_from(Some(truthy), &config), Some(true));
        }
        assert_eq!(simple_output_from(Some("0"), &config), Some(false));

        config.output.simple = Some(true);
        assert_eq!(simple_output_from(Some(""), &config), Some(true));
        assert_eq!(simple_output_from(Some("no"), &config), Some(false));
    }

    #[test]
    fn log_level_prefers_env_then_config_then_warn() {
        let mut config = DashConfig::default();
        assert_eq!(log_level_from(None, &config), "warn");

        config.logging.level = Some("info".to_string());
        assert_eq!(log_level_from(None, &config), "info");
        assert_eq!(log_level_from(Some("debug"), &config), "debug");
        assert_eq!(log_level_from(Some(" "), &config), "info");
    }

    #[test]
    fn unknown_keys_read_as_none() {
        let config = DashConfig::default();
        assert_eq!(get_config_value(&config, "mission.warp"), None);
        assert_eq!(
            get_config_value(&config, "mission.initial_fuel").as_deref(),
            Some("75")
        );
    }

    #[test]
    fn url_prefix_defaults_to_spotify() {
        let config = DashConfig::default();
        assert_eq!(resolve_url_prefix(&config), DEFAULT_URL_PREFIX);
    }
}
