//! 報表匯出
//!
//! 檔名格式為 `{base_name}_{YYYYMMDD_HHMMSS}.{xlsx|csv}`，欄位順序固定

use super::record::{UNKNOWN, VideoRecord};
use crate::config::{ReportFormat, SizeUnit};
use crate::error::CatalogError;
use crate::tools::{ensure_directory_exists, get_timestamp};
use log::info;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::{Path, PathBuf};

pub const CATALOG_REPORT_BASE: &str = "video_properties";
pub const DUPLICATE_REPORT_BASE: &str = "duplicate";

enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn optional(value: Option<f64>) -> Self {
        value.map_or_else(|| Self::Text(UNKNOWN.to_string()), Self::Number)
    }

    fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }
}

fn row_cells(record: &VideoRecord) -> [Cell; 5] {
    [
        Cell::Text(record.name.clone()),
        Cell::optional(record.duration_seconds),
        Cell::Text(record.frame_size_label()),
        Cell::Text(record.file_type.clone()),
        Cell::Number(record.file_size),
    ]
}

/// 報表欄位名稱，依輸出順序排列
#[must_use]
pub fn column_headers(size_unit: SizeUnit) -> [String; 5] {
    [
        "File Name".to_string(),
        "Duration (seconds)".to_string(),
        "Frame Size".to_string(),
        "File Type".to_string(),
        format!("File Size ({size_unit})"),
    ]
}

#[derive(Debug, Clone)]
pub struct ReportExporter {
    output_directory: PathBuf,
    format: ReportFormat,
    size_unit: SizeUnit,
}

impl ReportExporter {
    pub fn new(
        output_directory: impl Into<PathBuf>,
        format: ReportFormat,
        size_unit: SizeUnit,
    ) -> Self {
        Self {
            output_directory: output_directory.into(),
            format,
            size_unit,
        }
    }

    #[must_use]
    pub fn output_path(&self, base_name: &str, timestamp: &str) -> PathBuf {
        self.output_directory.join(format!(
            "{base_name}_{timestamp}.{}",
            self.format.extension()
        ))
    }

    /// 寫出報表並回傳檔案路徑
    ///
    /// 沒有資料列時仍會輸出只含標題列的檔案。寫入失敗時可能留下不完整的檔案，
    /// 但錯誤一定會回傳給呼叫端
    pub fn export(
        &self,
        records: &[VideoRecord],
        base_name: &str,
    ) -> Result<PathBuf, CatalogError> {
        let path = self.output_path(base_name, &get_timestamp());

        ensure_directory_exists(&self.output_directory)
            .map_err(|e| CatalogError::export(&path, format!("{e:#}")))?;

        match self.format {
            ReportFormat::Xlsx => self.write_xlsx(&path, records),
            ReportFormat::Csv => self.write_csv(&path, records),
        }
        .map_err(|message| CatalogError::export(&path, message))?;

        info!("已匯出 {} 筆資料到 {}", records.len(), path.display());
        Ok(path)
    }

    fn write_xlsx(&self, path: &Path, records: &[VideoRecord]) -> Result<(), String> {
        let write = || -> Result<(), XlsxError> {
            let mut workbook = Workbook::new();
            let header_format = Format::new().set_bold();
            let worksheet = workbook.add_worksheet();

            for (col, header) in (0u16..).zip(column_headers(self.size_unit)) {
                worksheet.write_string_with_format(0, col, header, &header_format)?;
            }

            for (row, record) in (1u32..).zip(records) {
                for (col, cell) in (0u16..).zip(row_cells(record)) {
                    match cell {
                        Cell::Text(text) => worksheet.write_string(row, col, text)?,
                        Cell::Number(number) => worksheet.write_number(row, col, number)?,
                    };
                }
            }

            worksheet.autofit();
            workbook.save(path)
        };
        write().map_err(|e| e.to_string())
    }

    fn write_csv(&self, path: &Path, records: &[VideoRecord]) -> Result<(), String> {
        let write = || -> Result<(), csv::Error> {
            let mut writer = csv::Writer::from_path(path)?;
            writer.write_record(column_headers(self.size_unit))?;
            for record in records {
                writer.write_record(row_cells(record).iter().map(Cell::to_text))?;
            }
            writer.flush()?;
            Ok(())
        };
        write().map_err(|e| e.to_string())
    }
}
