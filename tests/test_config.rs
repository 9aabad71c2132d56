use debris_shooter::config::*;

use log::LevelFilter;

// ── parse_log_level ───────────────────────────────────────────────────────────

#[test]
fn log_level_names_are_parsed() {
    assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_log_level(Some("trace")), LevelFilter::Trace);
    assert_eq!(parse_log_level(Some("off")), LevelFilter::Off);
}

#[test]
fn log_level_ignores_case_and_padding() {
    assert_eq!(parse_log_level(Some(" WARN ")), LevelFilter::Warn);
    assert_eq!(parse_log_level(Some("Error\n")), LevelFilter::Error);
}

#[test]
fn log_level_falls_back_to_info() {
    assert_eq!(parse_log_level(Some("bogus")), LevelFilter::Info);
    assert_eq!(parse_log_level(Some("")), LevelFilter::Info);
    assert_eq!(parse_log_level(None), LevelFilter::Info);
}

// ── log_file ──────────────────────────────────────────────────────────────────

#[test]
fn log_file_uses_setting_when_present() {
    assert_eq!(log_file(Some("/tmp/run.log")), "/tmp/run.log");
}

#[test]
fn log_file_defaults_when_missing_or_blank() {
    assert_eq!(log_file(None), DEFAULT_LOG_FILE);
    assert_eq!(log_file(Some("  ")), DEFAULT_LOG_FILE);
}
