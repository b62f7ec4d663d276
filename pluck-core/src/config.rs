//! Host configuration
//!
//! Every field has a default, so hosts only pass what they override:
//!
//! ```json
//! { "container_id": "essay", "prompts": ["Focus on these"] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Instructions sent with every export unless the host overrides them
pub const DEFAULT_PROMPTS: [&str; 2] = [
    "I would like to focus on the following",
    "I find the following interesting in this context",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionConfig {
    /// Element holding the plain text to segment
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Element receiving the serialized payload as text content
    #[serde(default = "default_output_id")]
    pub output_id: String,

    #[serde(default = "default_prompts")]
    pub prompts: Vec<String>,

    /// Gap in pixels between the container's bottom edge and the menu
    #[serde(default = "default_menu_offset")]
    pub menu_offset: f64,

    #[serde(default = "default_copy_success_ms")]
    pub copy_success_ms: u32,

    #[serde(default = "default_copy_failure_ms")]
    pub copy_failure_ms: u32,

    /// Word hover markers. `None` enables them on non-touch devices only.
    #[serde(default)]
    pub hover_enabled: Option<bool>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional debug button that shows the menu below the container
    #[serde(default = "default_test_trigger_id")]
    pub test_trigger_id: Option<String>,
}

fn default_container_id() -> String {
    "text-area".to_string()
}

fn default_output_id() -> String {
    "json-output".to_string()
}

fn default_prompts() -> Vec<String> {
    DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect()
}

fn default_menu_offset() -> f64 {
    10.0
}

fn default_copy_success_ms() -> u32 {
    900
}

fn default_copy_failure_ms() -> u32 {
    1200
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_test_trigger_id() -> Option<String> {
    Some("test-menu-button".to_string())
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            output_id: default_output_id(),
            prompts: default_prompts(),
            menu_offset: default_menu_offset(),
            copy_success_ms: default_copy_success_ms(),
            copy_failure_ms: default_copy_failure_ms(),
            hover_enabled: None,
            log_level: default_log_level(),
            test_trigger_id: default_test_trigger_id(),
        }
    }
}

impl SelectionConfig {
    /// Parse a JSON override; unknown fields are ignored
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether word hover markers should be shown on this device
    pub fn hover_enabled_for(&self, is_touch_device: bool) -> bool {
        self.hover_enabled.unwrap_or(!is_touch_device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = SelectionConfig::from_json("{}").unwrap();
        assert_eq!(config, SelectionConfig::default());
        assert_eq!(config.container_id, "text-area");
        assert_eq!(config.output_id, "json-output");
        assert_eq!(config.prompts.len(), 2);
    }

    #[test]
    fn test_partial_override() {
        let config =
            SelectionConfig::from_json(r#"{"container_id":"essay","copy_success_ms":500,"extra":1}"#)
                .unwrap();
        assert_eq!(config.container_id, "essay");
        assert_eq!(config.copy_success_ms, 500);
        assert_eq!(config.copy_failure_ms, 1200);
    }

    #[test]
    fn test_hover_follows_device_unless_forced() {
        let config = SelectionConfig::default();
        assert!(config.hover_enabled_for(false));
        assert!(!config.hover_enabled_for(true));

        let forced = SelectionConfig {
            hover_enabled: Some(true),
            ..SelectionConfig::default()
        };
        assert!(forced.hover_enabled_for(true));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(SelectionConfig::from_json("{not json").is_err());
    }
}
