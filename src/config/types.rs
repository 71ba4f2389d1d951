use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

pub const MAX_RECENT_PATHS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoFormatTable {
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl VideoFormatTable {
    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        self.video_file
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect()
    }

    /// 以檔名結尾比對，不分大小寫；只有副檔名的檔名（例如 `.mp4`）也算
    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };
        let file_name = file_name.to_string_lossy().to_lowercase();
        self.video_extensions_set()
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// 檔案大小的單位，整次執行固定使用同一種
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SizeUnit {
    #[serde(rename = "KB")]
    Kilobytes,
    #[default]
    #[serde(rename = "MB")]
    Megabytes,
}

impl SizeUnit {
    #[must_use]
    pub const fn divisor(self) -> f64 {
        match self {
            Self::Kilobytes => 1024.0,
            Self::Megabytes => 1024.0 * 1024.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 判定重複時比對的欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
    Duration,
    FrameSize,
    FileSize,
    FileType,
}

/// 重複判定鍵的預設組合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKey {
    /// 檔案大小 + 時長
    #[default]
    SizeAndDuration,
    /// 時長 + 解析度 + 檔案大小 + 檔案類型
    Full,
}

impl DuplicateKey {
    #[must_use]
    pub const fn fields(self) -> &'static [KeyField] {
        match self {
            Self::SizeAndDuration => &[KeyField::FileSize, KeyField::Duration],
            Self::Full => &[
                KeyField::Duration,
                KeyField::FrameSize,
                KeyField::FileSize,
                KeyField::FileType,
            ],
        }
    }
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeAndDuration => write!(f, "檔案大小 + 時長"),
            Self::Full => write!(f, "時長 + 解析度 + 檔案大小 + 檔案類型"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ReportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub size_unit: SizeUnit,
    #[serde(default)]
    pub duplicate_key: DuplicateKey,
    #[serde(default)]
    pub report_format: ReportFormat,
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
    /// 遞迴深度上限，`None` 表示不限制
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub recent_paths: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            size_unit: SizeUnit::default(),
            duplicate_key: DuplicateKey::default(),
            report_format: ReportFormat::default(),
            output_directory: default_output_directory(),
            max_depth: None,
            recent_paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub video_format_table: VideoFormatTable,
    pub settings: UserSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> VideoFormatTable {
        VideoFormatTable {
            video_file: vec![".mp4".into(), ".avi".into(), ".mkv".into(), ".mov".into()],
        }
    }

    #[test]
    fn test_is_video_file_case_insensitive() {
        let table = table();
        assert!(table.is_video_file(Path::new("/videos/a.mp4")));
        assert!(table.is_video_file(Path::new("/videos/B.MKV")));
        assert!(table.is_video_file(Path::new("clip.Mov")));
        assert!(!table.is_video_file(Path::new("notes.txt")));
        assert!(!table.is_video_file(Path::new("mp4")));
        assert!(!table.is_video_file(Path::new("clip.mp4.part")));
    }

    #[test]
    fn test_is_video_file_bare_extension_name() {
        let table = table();
        assert!(table.is_video_file(Path::new("/videos/.mp4")));
        assert!(table.is_video_file(Path::new(".MKV")));
    }

    #[test]
    fn test_settings_defaults_from_empty_json() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.size_unit, SizeUnit::Megabytes);
        assert_eq!(settings.duplicate_key, DuplicateKey::SizeAndDuration);
        assert_eq!(settings.report_format, ReportFormat::Xlsx);
        assert_eq!(settings.output_directory, PathBuf::from("."));
        assert!(settings.max_depth.is_none());
    }

    #[test]
    fn test_settings_parse_alternative_configuration() {
        let settings: UserSettings = serde_json::from_str(
            r#"{"size_unit":"KB","duplicate_key":"full","report_format":"csv","max_depth":3}"#,
        )
        .unwrap();
        assert_eq!(settings.size_unit, SizeUnit::Kilobytes);
        assert_eq!(settings.duplicate_key, DuplicateKey::Full);
        assert_eq!(settings.report_format, ReportFormat::Csv);
        assert_eq!(settings.max_depth, Some(3));
    }

    #[test]
    fn test_duplicate_key_fields() {
        assert_eq!(
            DuplicateKey::SizeAndDuration.fields(),
            &[KeyField::FileSize, KeyField::Duration]
        );
        assert_eq!(DuplicateKey::Full.fields().len(), 4);
    }
}
