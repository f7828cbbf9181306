//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs deserialize with
//! sensible values. Field names are camelCase on disk — the settings blob
//! is shared with the settings page's JavaScript.

mod pages;

pub use pages::*;

use serde::{Deserialize, Serialize};

/// Root dock configuration.
///
/// `width` and `height` are percentages of the target display's work area;
/// `trigger_distance` is in pixels from the bottom screen edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DockConfig {
    pub pages: Vec<PageConfig>,
    pub width: f64,
    pub height: f64,
    pub trigger_distance: i32,
    /// `"primary"` or a stable display identifier.
    pub display_id: String,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            pages: vec![PageConfig {
                items: vec![PageItemConfig {
                    url: "https://example.com".into(),
                    width: None,
                }],
            }],
            width: 50.0,
            height: 50.0,
            trigger_distance: 10,
            display_id: "primary".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = DockConfig::default();
        assert!((config.width - 50.0).abs() < f64::EPSILON);
        assert!((config.height - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.trigger_distance, 10);
        assert_eq!(config.display_id, "primary");
        assert_eq!(config.pages.len(), 1);
        assert_eq!(config.pages[0].items.len(), 1);
    }

    #[test]
    fn empty_json_gives_all_defaults() {
        let config: DockConfig = serde_json::from_str("{}").unwrap();
        let default = DockConfig::default();
        assert_eq!(config, default);
    }

    #[test]
    fn partial_json_deserializes_with_defaults() {
        let json = r#"{ "width": 80, "triggerDistance": 4 }"#;
        let config: DockConfig = serde_json::from_str(json).unwrap();
        assert!((config.width - 80.0).abs() < f64::EPSILON);
        assert_eq!(config.trigger_distance, 4);
        // Defaults preserved
        assert!((config.height - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.display_id, "primary");
    }

    #[test]
    fn camel_case_field_names_on_disk() {
        let json = serde_json::to_string(&DockConfig::default()).unwrap();
        assert!(json.contains("\"triggerDistance\""));
        assert!(json.contains("\"displayId\""));
        assert!(!json.contains("trigger_distance"));
    }

    #[test]
    fn pages_with_explicit_widths_round_trip() {
        let json = r#"{
            "pages": [
                { "items": [
                    { "url": "https://a.example", "width": 30 },
                    { "url": "https://b.example", "width": 70 }
                ] },
                { "items": [ { "url": "https://c.example" } ] }
            ]
        }"#;
        let config: DockConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.pages.len(), 2);
        assert_eq!(config.pages[0].items[0].width, Some(30.0));
        assert_eq!(config.pages[1].items[0].width, None);

        let out = serde_json::to_string(&config).unwrap();
        let back: DockConfig = serde_json::from_str(&out).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        // Older builds persisted extra keys; loading them must not fail.
        let json = r#"{ "width": 60, "url": "https://legacy.example" }"#;
        let config: DockConfig = serde_json::from_str(json).unwrap();
        assert!((config.width - 60.0).abs() < f64::EPSILON);
    }
}
