//! Runtime settings read from the environment by the binary.

use log::LevelFilter;

pub const LOG_FILE_VAR: &str = "DEBRIS_SHOOTER_LOG";
pub const LOG_LEVEL_VAR: &str = "DEBRIS_SHOOTER_LOG_LEVEL";
pub const DEFAULT_LOG_FILE: &str = "debris_shooter.log";

/// Log level from a raw setting.  Missing or unrecognised values give `Info`.
pub fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Log file path from a raw setting, falling back to the working directory.
pub fn log_file(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_LOG_FILE)
        .to_string()
}
