// Progress Indicator - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant carries the path it concerns so log lines are actionable.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced while preparing, opening, and watching the status file.
///
/// Only `FileOpenFailed` and `SubscribeFailed` are visible to the user (as an
/// error status); the others are logged and absorbed where they occur.
#[derive(Debug)]
pub enum WatchError {
    /// The parent directory of the watched file could not be created.
    /// Non-fatal: the file check that follows may still succeed.
    DirectoryCreateFailed { path: PathBuf, source: io::Error },

    /// The empty status file could not be created.
    FileCreateFailed { path: PathBuf, source: io::Error },

    /// The watched file could not be opened for reading. Fatal for the watcher.
    FileOpenFailed { path: PathBuf, source: io::Error },

    /// The filesystem notification subscription could not be registered.
    /// Handled exactly like `FileOpenFailed`.
    SubscribeFailed {
        path: PathBuf,
        source: notify::Error,
    },

    /// Re-reading the file after a change notification failed (file removed
    /// or permissions changed underneath us). The previous status is kept.
    TransientReadFailed { path: PathBuf, source: io::Error },

    /// The command line did not name a file to watch.
    InvalidArgument { reason: String },

    /// Configuration loading failed.
    Config(ConfigError),
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryCreateFailed { path, source } => write!(
                f,
                "Could not create parent directory '{}': {source}",
                path.display()
            ),
            Self::FileCreateFailed { path, source } => {
                write!(f, "Could not create file '{}': {source}", path.display())
            }
            Self::FileOpenFailed { path, source } => {
                write!(f, "Could not open file '{}': {source}", path.display())
            }
            Self::SubscribeFailed { path, source } => write!(
                f,
                "Could not watch file '{}' for changes: {source}",
                path.display()
            ),
            Self::TransientReadFailed { path, source } => {
                write!(f, "Could not read file '{}': {source}", path.display())
            }
            Self::InvalidArgument { reason } => write!(f, "Invalid arguments: {reason}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for WatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryCreateFailed { source, .. } => Some(source),
            Self::FileCreateFailed { source, .. } => Some(source),
            Self::FileOpenFailed { source, .. } => Some(source),
            Self::SubscribeFailed { source, .. } => Some(source),
            Self::TransientReadFailed { source, .. } => Some(source),
            Self::Config(e) => Some(e),
            Self::InvalidArgument { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for WatchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for Progress Indicator results.
pub type Result<T> = std::result::Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_open_failure_names_path_and_keeps_source() {
        let err = WatchError::FileOpenFailed {
            path: PathBuf::from("/tmp/status.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/status.log"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_argument_has_no_source() {
        let err = WatchError::InvalidArgument {
            reason: "missing --watchfile=PATH".to_string(),
        };
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "Invalid arguments: missing --watchfile=PATH"
        );
    }

    #[test]
    fn test_config_error_converts_and_chains() {
        let cfg = ConfigError::Io {
            path: PathBuf::from("config.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let err: WatchError = cfg.into();
        assert!(matches!(err, WatchError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
