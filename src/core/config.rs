//! Start-up configuration.
//!
//! The host page may embed a JSON block:
//!
//! ```html
//! <script id="kanban-config" type="application/json">
//!   { "column_label": "Lane", "drag_activation_px": 5 }
//! </script>
//! ```
//!
//! Every field is optional.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

use crate::core::models::Labels;

/// Id of the element holding the embedded configuration.
pub const CONFIG_ELEMENT_ID: &str = "kanban-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanConfig {
    pub column_label: String,
    pub task_label: String,
    /// Pointer travel before a press turns into a drag.
    pub drag_activation_px: u32,
    pub log_level: String,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        let labels = Labels::default();
        Self {
            column_label: labels.column,
            task_label: labels.task,
            drag_activation_px: 3,
            log_level: "info".to_string(),
        }
    }
}

impl KanbanConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: KanbanConfig = serde_json::from_str(json)?;
        // Reject bad levels here rather than when the subscriber is built
        config.level()?;
        Ok(config)
    }

    /// Reads the embedded configuration block, falling back to defaults.
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("Using default configuration: {}", e).into());
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(self.log_level.trim()).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn labels(&self) -> Labels {
        Labels {
            column: self.column_label.clone(),
            task: self.task_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_object_gives_defaults() {
        let config = KanbanConfig::from_json("{}").unwrap();
        assert_eq!(config, KanbanConfig::default());
        assert_eq!(config.drag_activation_px, 3);
        assert_eq!(config.labels(), Labels::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config =
            KanbanConfig::from_json(r#"{ "column_label": "Lane", "drag_activation_px": 8 }"#)
                .unwrap();
        assert_eq!(config.column_label, "Lane");
        assert_eq!(config.task_label, "Task");
        assert_eq!(config.drag_activation_px, 8);
    }

    #[rstest]
    #[case("trace", Level::TRACE)]
    #[case("DEBUG", Level::DEBUG)]
    #[case(" warn ", Level::WARN)]
    fn parses_log_levels(#[case] raw: &str, #[case] expected: Level) {
        let config = KanbanConfig {
            log_level: raw.to_string(),
            ..KanbanConfig::default()
        };
        assert_eq!(config.level().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = KanbanConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(ref level) if level == "loud"));
    }

    #[test]
    fn rejects_negative_activation_distance() {
        let err = KanbanConfig::from_json(r#"{ "drag_activation_px": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = KanbanConfig::from_json("{ column_label: }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
