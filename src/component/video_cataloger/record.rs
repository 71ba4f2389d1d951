use crate::config::SizeUnit;
use crate::error::ExtractionFailure;
use std::path::PathBuf;

/// 無法取得數值時輸出的文字
pub const UNKNOWN: &str = "Unknown";

/// 第一條視訊串流的畫面尺寸，寬高只會一起出現
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

/// 單一影片檔的中繼資料
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub path: PathBuf,
    pub name: String,
    /// 副檔名，不含前置的 `.`
    pub file_type: String,
    /// 已四捨五入到小數兩位
    pub duration_seconds: Option<f64>,
    pub frame_size: Option<FrameSize>,
    /// 以 `size_unit` 為單位，已四捨五入到小數兩位
    pub file_size: f64,
    pub size_unit: SizeUnit,
}

impl VideoRecord {
    #[must_use]
    pub fn width(&self) -> Option<u32> {
        self.frame_size.map(|f| f.width)
    }

    #[must_use]
    pub fn height(&self) -> Option<u32> {
        self.frame_size.map(|f| f.height)
    }

    /// "高 x 寬"，無法取得時為 "Unknown"
    #[must_use]
    pub fn frame_size_label(&self) -> String {
        self.frame_size.map_or_else(
            || UNKNOWN.to_string(),
            |f| format!("{} x {}", f.height, f.width),
        )
    }

    #[must_use]
    pub fn duration_label(&self) -> String {
        self.duration_seconds
            .map_or_else(|| UNKNOWN.to_string(), |d| d.to_string())
    }
}

/// 一次執行的完整目錄：依走訪順序排列，擷取失敗的檔案只出現在 `failures`
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub records: Vec<VideoRecord>,
    pub failures: Vec<ExtractionFailure>,
}

impl Catalog {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 四捨五入到小數兩位
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
