//! JSON config loading: read from a path or the platform default.

use std::path::{Path, PathBuf};

use ledge_common::ConfigError;
use tracing::info;

use crate::schema::DockConfig;
use crate::validation;

/// The platform-specific default config file path.
///
/// macOS: `~/Library/Application Support/ledge/config.json`
/// Linux: `~/.config/ledge/config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("ledge").join("config.json"))
}

/// Load config from a specific JSON file path.
///
/// Missing fields fall back to serde defaults; the result is normalized
/// (clamped) before being returned.
pub fn load_from_path(path: &Path) -> Result<DockConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::FileNotFound(path.to_path_buf()))?;

    let mut config: DockConfig = serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}")))?;

    validation::normalize(&mut config);
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// If no file exists, writes a default one and returns `first_run = true` —
/// the caller opens the settings window on first run.
pub fn load_config() -> Result<(DockConfig, bool), ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok((config, false)),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            let config = DockConfig::default();
            crate::json_writer::save_config_to_path(&config, &path)?;
            Ok((config, true))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_from_path_reads_valid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "width": 42, "displayId": "3" }"#).unwrap();

        let config = load_from_path(&path).unwrap();
        assert!((config.width - 42.0).abs() < f64::EPSILON);
        assert_eq!(config.display_id, "3");
        assert!((config.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_from_path_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_from_path_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_path_normalizes_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "width": 500, "triggerDistance": 0 }"#).unwrap();

        let config = load_from_path(&path).unwrap();
        assert!((config.width - 100.0).abs() < f64::EPSILON);
        assert_eq!(config.trigger_distance, 1);
    }
}
