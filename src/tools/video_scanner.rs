use crate::config::VideoFormatTable;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 遞迴列出所有影片檔，保留走訪順序（不排序）
///
/// 不追蹤符號連結，因此不會遇到循環；`max_depth` 為 `None` 時不限深度。
/// 無法讀取的項目記錄警告後略過。
pub fn scan_video_files(
    directory: &Path,
    video_format_table: &VideoFormatTable,
    max_depth: Option<usize>,
) -> Vec<PathBuf> {
    // 不追蹤符號連結
    let mut walker = WalkDir::new(directory).follow_links(false);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("無法讀取目錄項目: {e}");
                None
            }
        })
        // 只保留一般檔案，再依副檔名過濾
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| video_format_table.is_video_file(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect()
}
