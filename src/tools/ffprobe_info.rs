use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Video,
    Audio,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackInfo {
    pub kind: TrackKind,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration_seconds: Option<f64>,
}

/// 探測結果：容器時長（秒）與依原始順序排列的串流
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeReport {
    pub duration_seconds: Option<f64>,
    pub tracks: Vec<TrackInfo>,
}

impl ProbeReport {
    /// 多條視訊串流時取第一條
    #[must_use]
    pub fn first_video_track(&self) -> Option<&TrackInfo> {
        self.tracks.iter().find(|t| t.kind == TrackKind::Video)
    }
}

/// 讀取影片容器與串流資訊的外部工具
pub trait MediaProbe {
    fn probe(&self, path: &Path) -> Result<ProbeReport>;
}

/// 以 ffprobe 子程序實作的探測器
#[derive(Debug, Clone, Copy, Default)]
pub struct FfprobeProbe;

impl MediaProbe for FfprobeProbe {
    fn probe(&self, path: &Path) -> Result<ProbeReport> {
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .output()
            .with_context(|| format!("無法執行 ffprobe: {}", path.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("ffprobe 執行失敗 ({}): {}", output.status, stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_ffprobe_output(&stdout)
    }
}

#[derive(Deserialize)]
struct FfprobeOutput {
    format: Option<FormatInfo>,
    streams: Option<Vec<StreamInfo>>,
}

#[derive(Deserialize)]
struct FormatInfo {
    duration: Option<String>,
}

#[derive(Deserialize)]
struct StreamInfo {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    duration: Option<String>,
}

/// 解析 `ffprobe -print_format json` 的輸出
pub fn parse_ffprobe_output(json: &str) -> Result<ProbeReport> {
    let probe: FfprobeOutput = serde_json::from_str(json).context("無法解析 ffprobe 輸出")?;

    let duration_seconds = probe
        .format
        .and_then(|f| f.duration)
        .and_then(|d| parse_seconds(&d));

    let tracks = probe
        .streams
        .unwrap_or_default()
        .into_iter()
        .map(|s| TrackInfo {
            kind: match s.codec_type.as_deref() {
                Some("video") => TrackKind::Video,
                Some("audio") => TrackKind::Audio,
                _ => TrackKind::Other,
            },
            width: s.width.filter(|&w| w > 0),
            height: s.height.filter(|&h| h > 0),
            duration_seconds: s.duration.as_deref().and_then(parse_seconds),
        })
        .collect();

    Ok(ProbeReport {
        duration_seconds,
        tracks,
    })
}

// ffprobe 在未知時長時會輸出 "N/A"
fn parse_seconds(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
}
