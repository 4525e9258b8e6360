use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::letter::Letter;
use super::pool::DEFAULT_START_COUNT;

pub const MAX_START_COUNT: u8 = 99;
pub const DEFAULT_POOL_COLUMNS: usize = 9;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("start_count must be between 1 and 99, got {0}")]
    InvalidStartCount(u8),
    #[error("pool_columns must be between 1 and 26, got {0}")]
    InvalidColumns(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub start_count: u8,
    pub pool_columns: usize,
    pub theme: ThemeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_count: DEFAULT_START_COUNT,
            pool_columns: DEFAULT_POOL_COLUMNS,
            theme: ThemeSettings::default(),
        }
    }
}

impl Settings {
    pub fn validate(self) -> Result<Self, SettingsError> {
        if self.start_count == 0 || self.start_count > MAX_START_COUNT {
            return Err(SettingsError::InvalidStartCount(self.start_count));
        }
        if self.pool_columns == 0 || self.pool_columns > Letter::COUNT {
            return Err(SettingsError::InvalidColumns(self.pool_columns));
        }
        Ok(self)
    }
}

/// Colour overrides; each value is a colour name (`"cyan"`, `"dark_gray"`) or `#RRGGBB`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depleted_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depleted_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_fg: Option<String>,
}

pub fn parse_settings(text: &str) -> Result<Settings, SettingsError> {
    let settings: Settings = serde_json::from_str(text)?;
    settings.validate()
}

/// 文件不存在不算错误，返回默认配置。
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_settings(&text)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/settings.rs"]
mod tests;
