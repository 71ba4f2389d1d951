use crate::config::types::{Config, UserSettings, VideoFormatTable};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// 編譯時嵌入的影片格式設定（不需要外部檔案）
const VIDEO_FORMAT_TABLE_JSON: &str = include_str!("../data/video_format_table.json");

pub const SETTINGS_PATH: &str = "settings.json";

impl Config {
    pub fn new() -> Result<Self> {
        let settings = Self::load_settings(Path::new(SETTINGS_PATH)).unwrap_or_else(|e| {
            warn!("設定檔無法使用，改用預設值: {e:#}");
            UserSettings::default()
        });
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: UserSettings) -> Result<Self> {
        Ok(Self {
            video_format_table: Self::load_embedded_video_format_table()?,
            settings,
        })
    }

    pub fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }

    /// 從編譯時嵌入的 JSON 載入影片格式表
    fn load_embedded_video_format_table() -> Result<VideoFormatTable> {
        serde_json::from_str(VIDEO_FORMAT_TABLE_JSON).context("無法解析嵌入的影片格式設定")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::SizeUnit;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_table_lists_supported_formats() {
        let config = Config::with_settings(UserSettings::default()).unwrap();
        let extensions = config.video_format_table.video_extensions_set();
        for ext in [".mp4", ".avi", ".mkv", ".mov"] {
            assert!(extensions.contains(ext), "missing {ext}");
        }
        assert_eq!(extensions.len(), 4);
    }

    #[test]
    fn test_load_missing_settings_returns_default() {
        let settings = Config::load_settings(Path::new("/nonexistent/settings.json")).unwrap();
        assert_eq!(settings.size_unit, SizeUnit::Megabytes);
    }

    #[test]
    fn test_load_malformed_settings_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_settings(&path).is_err());
    }
}
