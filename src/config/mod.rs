pub mod load;
pub mod save;
pub mod types;

pub use load::SETTINGS_PATH;
pub use save::{add_recent_path, save_settings, save_settings_to};
pub use types::{
    Config, DuplicateKey, KeyField, MAX_RECENT_PATHS, ReportFormat, SizeUnit, UserSettings,
    VideoFormatTable,
};
