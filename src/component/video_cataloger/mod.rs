//! 影片資訊匯出與重複檢查元件
//!
//! 掃描資料夾內的影片，匯出中繼資料報表，並依中繼資料找出疑似重複的檔案

mod catalog_builder;
mod duplicate_detector;
mod main;
mod metadata_extractor;
mod pipeline;
mod record;
mod report_exporter;

pub use catalog_builder::CatalogBuilder;
pub use duplicate_detector::{DuplicateGroup, DuplicateSubset, find_duplicates};
pub use main::VideoCataloger;
pub use metadata_extractor::MetadataExtractor;
pub use pipeline::{CatalogOutcome, run_catalog};
pub use record::{Catalog, FrameSize, UNKNOWN, VideoRecord, round2};
pub use report_exporter::{
    CATALOG_REPORT_BASE, DUPLICATE_REPORT_BASE, ReportExporter, column_headers,
};
