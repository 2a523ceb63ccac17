//! Application-wide constants.
//!
//! Centralizes refresh timing, layout dimensions, color band thresholds,
//! and the on-disk locations of the config and log files.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Minimum allowed refresh rate (ms) to prevent excessive CPU usage.
pub const MIN_REFRESH_MS: u64 = 100;
/// Default refresh interval (ms).
pub const DEFAULT_REFRESH_MS: u64 = 1000;
/// Status message display duration (seconds).
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 5;

// ── UI Layout ─────────────────────────────────────────────────────
/// Default number of core gauges per grid row.
pub const DEFAULT_CORES_PER_ROW: usize = 4;
/// Upper bound for `cores_per_row`.
pub const MAX_CORES_PER_ROW: usize = 16;
/// Height of a bordered gauge (top border, bar, bottom border).
pub const GAUGE_HEIGHT: u16 = 3;
/// Minimum height reserved for the process table.
pub const MIN_TABLE_HEIGHT: u16 = 5;
/// Fixed width of the signal overlay.
pub const OVERLAY_WIDTH: u16 = 44;
/// Rows taken by the overlay border (top + bottom).
pub const OVERLAY_BORDER_ROWS: u16 = 2;
/// Horizontal indent of the overlay from the table's left edge.
pub const OVERLAY_X_INDENT: u16 = 4;
/// Longest process name shown in the overlay title.
pub const OVERLAY_NAME_MAX: usize = 16;

// ── Usage Color Thresholds ────────────────────────────────────────
/// Usage percentage at or above which the band is "urgent".
pub const USAGE_URGENT_PCT: f32 = 90.0;
/// Usage percentage at or above which the band is "high".
pub const USAGE_HIGH_PCT: f32 = 70.0;
/// Usage percentage at or above which the band is "moderate".
pub const USAGE_MODERATE_PCT: f32 = 50.0;

// ── Logging ───────────────────────────────────────────────────────
/// Env var holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "THOP_LOG";
/// Env var overriding the log file location.
pub const LOG_FILE_ENV: &str = "THOP_LOG_FILE";
/// Filter used when `THOP_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/thop/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("thop")
}

/// Returns `~/.config/thop/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the log file path: `$THOP_LOG_FILE`, else `~/.config/thop/thop.log`.
pub fn log_file_path() -> PathBuf {
    match std::env::var(LOG_FILE_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => config_dir().join("thop.log"),
    }
}
