use super::catalog_builder::CatalogBuilder;
use super::duplicate_detector::{DuplicateSubset, find_duplicates};
use super::metadata_extractor::MetadataExtractor;
use super::record::Catalog;
use super::report_exporter::{CATALOG_REPORT_BASE, DUPLICATE_REPORT_BASE, ReportExporter};
use crate::config::Config;
use crate::error::CatalogError;
use crate::tools::MediaProbe;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct CatalogOutcome {
    pub catalog: Catalog,
    pub duplicates: DuplicateSubset,
    pub catalog_report: PathBuf,
    /// 沒有重複時不會產生
    pub duplicate_report: Option<PathBuf>,
}

/// 掃描、擷取、匯出完整目錄，再找出重複並匯出重複清單
///
/// 兩次匯出彼此獨立：重複清單匯出失敗時，已寫出的完整目錄不受影響
pub fn run_catalog<P: MediaProbe>(
    root: &Path,
    config: &Config,
    probe: P,
    show_progress: bool,
) -> Result<CatalogOutcome, CatalogError> {
    let settings = &config.settings;

    let extractor = MetadataExtractor::new(
        probe,
        config.video_format_table.clone(),
        settings.size_unit,
    );
    let catalog = CatalogBuilder::new(extractor)
        .max_depth(settings.max_depth)
        .show_progress(show_progress)
        .build(root)?;

    let exporter = ReportExporter::new(
        &settings.output_directory,
        settings.report_format,
        settings.size_unit,
    );
    let catalog_report = exporter.export(&catalog.records, CATALOG_REPORT_BASE)?;

    let duplicates = find_duplicates(&catalog.records, settings.duplicate_key.fields());
    info!(
        "重複判定 ({}) - 群組: {}, 檔案: {}",
        settings.duplicate_key,
        duplicates.groups.len(),
        duplicates.records.len()
    );

    let duplicate_report = if duplicates.is_empty() {
        None
    } else {
        Some(exporter.export(&duplicates.records, DUPLICATE_REPORT_BASE)?)
    };

    Ok(CatalogOutcome {
        catalog,
        duplicates,
        catalog_report,
        duplicate_report,
    })
}
