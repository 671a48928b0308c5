use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Which subset of the task list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Selector order, left to right
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    /// Whether a task belongs to this subset
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.is_completed(),
            FilterMode::Completed => task.is_completed(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FilterMode::All => FilterMode::Completed,
            FilterMode::Active => FilterMode::All,
            FilterMode::Completed => FilterMode::Active,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter \"{0}\" (expected all, active or completed)")]
pub struct ParseFilterError(String);

impl FromStr for FilterMode {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" | "done" => Ok(FilterMode::Completed),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}
