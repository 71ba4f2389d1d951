mod ffprobe_info;
mod path_validator;
mod timestamp;
mod video_scanner;

pub use ffprobe_info::{
    FfprobeProbe, MediaProbe, ProbeReport, TrackInfo, TrackKind, parse_ffprobe_output,
};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
pub use timestamp::{format_duration, get_timestamp};
pub use video_scanner::scan_video_files;
