//! 影片目錄主模組
//!
//! 取得資料夾路徑、執行整個流程並顯示結果摘要

use super::pipeline::{CatalogOutcome, run_catalog};
use crate::config::{Config, add_recent_path, save_settings};
use crate::tools::{FfprobeProbe, format_duration};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::{info, warn};
use std::path::PathBuf;

pub struct VideoCataloger {
    config: Config,
}

impl VideoCataloger {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// `folder` 為 `None` 時以互動方式詢問
    pub fn run(&mut self, folder: Option<String>) -> Result<()> {
        println!("{}", style("=== 影片資訊匯出與重複檢查 ===").cyan().bold());

        let input_path = match folder {
            Some(path) => path.trim().to_string(),
            None => self.prompt_input_path()?,
        };
        let directory = PathBuf::from(&input_path);

        println!("{}", style("掃描影片檔案中...").dim());
        let outcome = run_catalog(&directory, &self.config, FfprobeProbe, true)?;

        self.print_summary(&outcome);
        self.remember_path(&input_path);

        Ok(())
    }

    fn prompt_input_path(&self) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt("請輸入影片資料夾路徑");
        if let Some(recent) = self.config.settings.recent_paths.first() {
            input = input.default(recent.clone());
        }
        let path = input.interact_text()?;
        Ok(path.trim().to_string())
    }

    fn remember_path(&mut self, path: &str) {
        add_recent_path(&mut self.config.settings, path);
        if let Err(e) = save_settings(&self.config.settings) {
            warn!("無法儲存設定: {e:#}");
        }
    }

    fn print_summary(&self, outcome: &CatalogOutcome) {
        let catalog = &outcome.catalog;

        println!();
        println!("{}", style("=== 掃描摘要 ===").cyan().bold());
        println!(
            "  影片檔案: {} 個",
            catalog.records.len() + catalog.failures.len()
        );
        println!("  成功擷取: {} 個", style(catalog.records.len()).green());
        if !catalog.failures.is_empty() {
            println!("  擷取失敗: {} 個", style(catalog.failures.len()).red());
            for failure in &catalog.failures {
                println!("    {} {}", style("✗").red(), failure);
            }
        }

        println!();
        if outcome.duplicates.is_empty() {
            println!("{}", style("未發現重複的影片檔案").green());
        } else {
            println!(
                "{}",
                style(format!(
                    "發現 {} 組重複影片，共 {} 個檔案（比對: {}）",
                    outcome.duplicates.groups.len(),
                    outcome.duplicates.records.len(),
                    self.config.settings.duplicate_key
                ))
                .yellow()
            );
            println!("--------------------------------");
            for (i, group) in outcome.duplicates.groups.iter().enumerate() {
                println!("  {}", style(format!("[第 {} 組]", i + 1)).dim());
                for record in &group.records {
                    let duration = record
                        .duration_seconds
                        .map_or_else(|| record.duration_label(), format_duration);
                    println!(
                        "    {} ({}, {}, {} {}, {})",
                        record.name,
                        style(duration).cyan(),
                        record.frame_size_label(),
                        record.file_size,
                        record.size_unit,
                        record.file_type
                    );
                }
            }
            println!("--------------------------------");
        }

        println!();
        println!(
            "{} {}",
            style("完整清單已匯出:").green(),
            outcome.catalog_report.display()
        );
        if let Some(path) = &outcome.duplicate_report {
            println!("{} {}", style("重複清單已匯出:").yellow(), path.display());
        }

        info!(
            "任務完成 - 成功: {}, 失敗: {}, 重複: {}",
            catalog.records.len(),
            catalog.failures.len(),
            outcome.duplicates.records.len()
        );
    }
}
