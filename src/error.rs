//! 錯誤型別
//!
//! 只有 `DirectoryNotFound` 與 `Export` 會中止執行；單一檔案的擷取失敗
//! 以 `ExtractionFailure` 回傳，由呼叫端記錄後略過

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("路徑不存在或不是資料夾: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("無法匯出報表 {}: {message}", path.display())]
    Export { path: PathBuf, message: String },
}

impl CatalogError {
    pub(crate) fn export(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Export {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// 單一檔案的擷取失敗，帶有檔名與原因
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("處理檔案失敗 '{file_name}': {message}")]
pub struct ExtractionFailure {
    pub file_name: String,
    pub message: String,
}

impl ExtractionFailure {
    pub fn new(file_name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self {
            file_name: file_name.into(),
            message: message.to_string(),
        }
    }
}
