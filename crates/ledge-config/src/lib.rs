//! Ledge configuration system.
//!
//! JSON-based settings with serde defaults so partial configs work out of
//! the box. The settings window reads and writes the same blob over IPC;
//! persistence always goes through [`save_config`].

pub mod json_loader;
pub mod json_writer;
pub mod schema;
pub mod validation;

pub use json_loader::{load_config, load_from_path};
pub use json_writer::{save_config, save_config_to_path};
pub use schema::{DockConfig, PageConfig, PageItemConfig};

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DockConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_fields() {
        let config = DockConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"pages\""));
        assert!(json.contains("\"width\""));
        assert!(json.contains("\"height\""));
        assert!(json.contains("\"triggerDistance\""));
        assert!(json.contains("\"displayId\""));
    }

    #[test]
    fn config_to_json_round_trips() {
        let config = DockConfig::default();
        let json = config_to_json(&config);
        let parsed: DockConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.display_id, "primary");
        assert_eq!(parsed.pages.len(), config.pages.len());
    }
}
