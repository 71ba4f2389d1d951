use super::metadata_extractor::MetadataExtractor;
use super::record::Catalog;
use crate::error::CatalogError;
use crate::tools::{MediaProbe, scan_video_files, validate_directory_exists};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::Path;

pub struct CatalogBuilder<P> {
    extractor: MetadataExtractor<P>,
    max_depth: Option<usize>,
    show_progress: bool,
}

impl<P: MediaProbe> CatalogBuilder<P> {
    pub const fn new(extractor: MetadataExtractor<P>) -> Self {
        Self {
            extractor,
            max_depth: None,
            show_progress: false,
        }
    }

    #[must_use]
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 走訪資料夾並擷取每個影片檔，依走訪順序回傳
    ///
    /// 資料夾不存在時在任何處理之前回傳 `DirectoryNotFound`
    pub fn build(&self, root: &Path) -> Result<Catalog, CatalogError> {
        validate_directory_exists(root)?;

        info!("開始掃描目錄: {}", root.display());
        let video_files =
            scan_video_files(root, self.extractor.video_format_table(), self.max_depth);
        info!("找到 {} 個影片檔案", video_files.len());

        let progress_bar = self.progress_bar(video_files.len() as u64);
        let mut catalog = Catalog::default();

        for path in &video_files {
            match self.extractor.extract(path) {
                Ok(record) => catalog.records.push(record),
                Err(failure) => {
                    warn!("{failure}");
                    catalog.failures.push(failure);
                }
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        info!(
            "擷取完成 - 成功: {}, 失敗: {}",
            catalog.records.len(),
            catalog.failures.len()
        );

        Ok(catalog)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(len);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        progress_bar.set_message("擷取影片資訊中...");
        progress_bar
    }
}
