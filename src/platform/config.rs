// Progress Indicator - platform/config.rs
//
// Platform config directory resolution and optional config.toml loading
// with startup validation. The file only shapes the window and logging;
// the tail watcher never reads configuration.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::{ConfigError, WatchError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Progress Indicator configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/progressindicator/)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of the optional config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[window]` section.
    pub window: WindowSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[window]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct WindowSection {
    /// Keep the window above all others.
    pub always_on_top: Option<bool>,
    /// Initial width in points.
    pub width: Option<f32>,
    /// Initial height in points.
    pub height: Option<f32>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Status message font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Keep the window above all others.
    pub always_on_top: bool,
    /// Initial window width.
    pub window_width: f32,
    /// Initial window height.
    pub window_height: f32,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Status message font size in points.
    pub font_size: f32,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            always_on_top: true,
            window_width: constants::DEFAULT_WINDOW_WIDTH,
            window_height: constants::DEFAULT_WINDOW_HEIGHT,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings.
/// If the file is unreadable or unparseable, returns defaults and a warning;
/// the application still starts.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(source) => {
            let err = WatchError::from(ConfigError::Io {
                path: config_path.to_path_buf(),
                source,
            });
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => validate(raw),
        Err(source) => {
            let err = WatchError::from(ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source,
            });
            (AppConfig::default(), vec![format!("{err}. Using defaults.")])
        }
    }
}

/// Check each raw value against its named bounds, accumulating warnings.
fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    if let Some(on_top) = raw.window.always_on_top {
        config.always_on_top = on_top;
    }

    if let Some(width) = raw.window.width {
        if (constants::MIN_WINDOW_WIDTH..=constants::MAX_WINDOW_WIDTH).contains(&width) {
            config.window_width = width;
        } else {
            warnings.push(format!(
                "[window] width = {width} is out of range ({}-{}). Using default ({}).",
                constants::MIN_WINDOW_WIDTH,
                constants::MAX_WINDOW_WIDTH,
                constants::DEFAULT_WINDOW_WIDTH,
            ));
        }
    }

    if let Some(height) = raw.window.height {
        if (constants::MIN_WINDOW_HEIGHT..=constants::MAX_WINDOW_HEIGHT).contains(&height) {
            config.window_height = height;
        } else {
            warnings.push(format!(
                "[window] height = {height} is out of range ({}-{}). Using default ({}).",
                constants::MIN_WINDOW_HEIGHT,
                constants::MAX_WINDOW_HEIGHT,
                constants::DEFAULT_WINDOW_HEIGHT,
            ));
        }
    }

    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(format!(
                "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
            )),
        }
    }

    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    if let Some(ref level) = raw.logging.level {
        let lowered = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lowered.as_str()) {
            config.log_level = Some(lowered);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}
