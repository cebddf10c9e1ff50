// Progress Indicator - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ProgressIndicator";

/// Application identifier used for config directories.
pub const APP_ID: &str = "ProgressIndicator";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line description shown under the app name in the usage window.
pub const APP_TAGLINE: &str = "Real-time log file viewer";

// =============================================================================
// Command line
// =============================================================================

/// The only argument form the watcher accepts: `--watchfile=PATH`.
pub const WATCHFILE_PREFIX: &str = "--watchfile=";

/// Usage line shown in both the console and the usage window.
pub const USAGE_LINE: &str = "progress-indicator --watchfile=PATH_TO_LOG_FILE";

/// Example invocation shown in both the console and the usage window.
pub const USAGE_EXAMPLE: &str = "progress-indicator --watchfile=/tmp/my-progress.log";

/// Hint on how to dismiss the window.
pub const EXIT_HINT: &str = "Close the window or kill the process to exit";

// =============================================================================
// Window geometry
// =============================================================================

/// Default window size (points).
pub const DEFAULT_WINDOW_WIDTH: f32 = 480.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 150.0;

/// Window size bounds (points).
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MAX_WINDOW_WIDTH: f32 = 600.0;
pub const MIN_WINDOW_HEIGHT: f32 = 120.0;
pub const MAX_WINDOW_HEIGHT: f32 = 200.0;

/// Usage window size (points). Taller than the progress window so the
/// whole help text fits without scrolling.
pub const USAGE_WINDOW_WIDTH: f32 = 520.0;
pub const USAGE_WINDOW_HEIGHT: f32 = 300.0;

// =============================================================================
// UI defaults
// =============================================================================

/// Default font size of the status message (points).
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable status font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable status font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a status line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
