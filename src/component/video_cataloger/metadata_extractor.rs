//! 影片中繼資料擷取
//!
//! 將探測結果正規化成 [`VideoRecord`]；任何失敗都只影響單一檔案

use super::record::{FrameSize, VideoRecord, round2};
use crate::config::{SizeUnit, VideoFormatTable};
use crate::error::ExtractionFailure;
use crate::tools::MediaProbe;
use log::debug;
use std::fs;
use std::path::Path;

pub struct MetadataExtractor<P> {
    probe: P,
    video_format_table: VideoFormatTable,
    size_unit: SizeUnit,
}

impl<P: MediaProbe> MetadataExtractor<P> {
    pub const fn new(probe: P, video_format_table: VideoFormatTable, size_unit: SizeUnit) -> Self {
        Self {
            probe,
            video_format_table,
            size_unit,
        }
    }

    #[must_use]
    pub const fn video_format_table(&self) -> &VideoFormatTable {
        &self.video_format_table
    }

    #[must_use]
    pub const fn size_unit(&self) -> SizeUnit {
        self.size_unit
    }

    /// 擷取單一影片檔的中繼資料
    ///
    /// 探測成功但缺少時長或尺寸時，對應欄位為 `None`，不視為失敗
    pub fn extract(&self, path: &Path) -> Result<VideoRecord, ExtractionFailure> {
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );

        if !self.video_format_table.is_video_file(path) {
            return Err(ExtractionFailure::new(name, "不支援的檔案類型"));
        }

        // 取最後一個 `.` 之後的部分，`.mp4` 這種檔名也能得到 "mp4"
        let file_type = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_string())
            .unwrap_or_default();

        let metadata = fs::metadata(path).map_err(|e| ExtractionFailure::new(&name, e))?;
        let file_size = round2(metadata.len() as f64 / self.size_unit.divisor());

        let report = self
            .probe
            .probe(path)
            .map_err(|e| ExtractionFailure::new(&name, format!("{e:#}")))?;

        let video_track = report.first_video_track();

        // 容器時長優先，其次使用視訊串流本身的時長
        let duration_seconds = report
            .duration_seconds
            .or_else(|| video_track.and_then(|t| t.duration_seconds))
            .map(round2);

        let frame_size = video_track.and_then(|t| {
            Some(FrameSize {
                width: t.width?,
                height: t.height?,
            })
        });

        debug!(
            "{name}: duration={duration_seconds:?}, frame_size={frame_size:?}, size={file_size}{}",
            self.size_unit
        );

        Ok(VideoRecord {
            path: path.to_path_buf(),
            name,
            file_type,
            duration_seconds,
            frame_size,
            file_size,
            size_unit: self.size_unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{ProbeReport, TrackInfo, TrackKind};
    use anyhow::{Result, bail};
    use tempfile::TempDir;

    struct StubProbe(Option<ProbeReport>);

    impl MediaProbe for StubProbe {
        fn probe(&self, _path: &Path) -> Result<ProbeReport> {
            match &self.0 {
                Some(report) => Ok(report.clone()),
                None => bail!("Invalid data found when processing input"),
            }
        }
    }

    fn table() -> VideoFormatTable {
        VideoFormatTable {
            video_file: vec![".mp4".into(), ".avi".into(), ".mkv".into(), ".mov".into()],
        }
    }

    fn video(width: Option<u32>, height: Option<u32>, duration: Option<f64>) -> TrackInfo {
        TrackInfo {
            kind: TrackKind::Video,
            width,
            height,
            duration_seconds: duration,
        }
    }

    fn write_file(dir: &TempDir, name: &str, len: usize) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn test_extract_full_record() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "Movie.MP4", 512_000);
        let report = ProbeReport {
            duration_seconds: Some(10.004),
            tracks: vec![
                TrackInfo {
                    kind: TrackKind::Audio,
                    width: None,
                    height: None,
                    duration_seconds: Some(9.9),
                },
                video(Some(1920), Some(1080), None),
                video(Some(640), Some(360), None),
            ],
        };
        let extractor =
            MetadataExtractor::new(StubProbe(Some(report)), table(), SizeUnit::Kilobytes);

        let record = extractor.extract(&path).unwrap();
        assert_eq!(record.name, "Movie.MP4");
        assert_eq!(record.file_type, "MP4");
        assert_eq!(record.duration_seconds, Some(10.0));
        assert_eq!(record.frame_size_label(), "1080 x 1920");
        assert_eq!(record.file_size, 500.0);
        assert_eq!(record.size_unit, SizeUnit::Kilobytes);
    }

    #[test]
    fn test_extract_size_in_megabytes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.mkv", 3 * 1024 * 1024 / 2);
        let report = ProbeReport {
            duration_seconds: Some(1.0),
            tracks: vec![video(Some(2), Some(2), None)],
        };
        let extractor =
            MetadataExtractor::new(StubProbe(Some(report)), table(), SizeUnit::Megabytes);
        assert_eq!(extractor.extract(&path).unwrap().file_size, 1.5);
    }

    #[test]
    fn test_extract_falls_back_to_track_duration() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.avi", 10);
        let report = ProbeReport {
            duration_seconds: None,
            tracks: vec![video(Some(640), Some(480), Some(42.126))],
        };
        let extractor =
            MetadataExtractor::new(StubProbe(Some(report)), table(), SizeUnit::Megabytes);
        assert_eq!(extractor.extract(&path).unwrap().duration_seconds, Some(42.13));
    }

    #[test]
    fn test_extract_marks_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.mov", 10);
        let report = ProbeReport {
            duration_seconds: None,
            tracks: vec![video(Some(640), None, None)],
        };
        let extractor =
            MetadataExtractor::new(StubProbe(Some(report)), table(), SizeUnit::Megabytes);

        let record = extractor.extract(&path).unwrap();
        assert!(record.duration_seconds.is_none());
        assert!(record.frame_size.is_none());
        assert_eq!(record.frame_size_label(), "Unknown");
    }

    #[test]
    fn test_extract_bare_extension_file_name() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, ".mp4", 1024);
        let report = ProbeReport {
            duration_seconds: Some(3.0),
            tracks: vec![video(Some(320), Some(240), None)],
        };
        let extractor =
            MetadataExtractor::new(StubProbe(Some(report)), table(), SizeUnit::Kilobytes);

        let record = extractor.extract(&path).unwrap();
        assert_eq!(record.name, ".mp4");
        assert_eq!(record.file_type, "mp4");
        assert_eq!(record.file_size, 1.0);
    }

    #[test]
    fn test_extract_probe_failure() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "broken.mp4", 10);
        let extractor = MetadataExtractor::new(StubProbe(None), table(), SizeUnit::Megabytes);

        let failure = extractor.extract(&path).unwrap_err();
        assert_eq!(failure.file_name, "broken.mp4");
        assert!(failure.message.contains("Invalid data"));
    }

    #[test]
    fn test_extract_rejects_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt", 10);
        let extractor = MetadataExtractor::new(
            StubProbe(Some(ProbeReport::default())),
            table(),
            SizeUnit::Megabytes,
        );
        assert_eq!(extractor.extract(&path).unwrap_err().file_name, "notes.txt");
    }

    #[test]
    fn test_extract_missing_file() {
        let extractor = MetadataExtractor::new(
            StubProbe(Some(ProbeReport::default())),
            table(),
            SizeUnit::Megabytes,
        );
        let failure = extractor
            .extract(Path::new("/nonexistent/gone.mp4"))
            .unwrap_err();
        assert_eq!(failure.file_name, "gone.mp4");
    }
}
