use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

pub const INIT_BASELINE_PATH: &str = "init-baseline";
pub const CHECK_PATH: &str = "check";
pub const HEALTH_PATH: &str = "health";

pub const SUCCESS_STATUS: &str = "success";
pub const HEALTH_OK_STATUS: &str = "ok";

/// How long a success status stays visible before the region goes idle.
pub const SUCCESS_CLEAR_DELAY: Duration = Duration::from_secs(5);

pub const INIT_LOADING_TEXT: &str = "Initializing baseline...";
pub const CHECK_LOADING_TEXT: &str = "Checking integrity...";
pub const INIT_FALLBACK_MESSAGE: &str = "Failed to initialize baseline";
pub const CHECK_FALLBACK_MESSAGE: &str = "Failed to check integrity";
pub const EMPTY_PATH_MESSAGE: &str = "Please enter a folder path";

pub const SUCCESS_GLYPH: &str = "✅";
pub const ERROR_GLYPH: &str = "❌";

pub const MODIFIED_MARKER: &str = "⚠️";
pub const ADDED_MARKER: &str = "➕";
pub const DELETED_MARKER: &str = "➖";
