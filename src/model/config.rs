use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::filter::FilterMode;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Header text
    #[serde(default = "default_title")]
    pub title: String,
    /// Seed the list with sample tasks on startup
    #[serde(default = "default_true")]
    pub samples: bool,
    /// Filter selected when the UI opens
    #[serde(default)]
    pub default_filter: FilterMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            title: default_title(),
            samples: true,
            default_filter: FilterMode::All,
        }
    }
}

fn default_title() -> String {
    "Todo List".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the HH:MM creation time after each task
    #[serde(default = "default_true")]
    pub show_created_time: bool,
    /// Ask before deleting a single task
    #[serde(default)]
    pub confirm_delete: bool,
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme field name
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_created_time: true,
            confirm_delete: false,
            show_key_hints: true,
            colors: BTreeMap::new(),
        }
    }
}
