// Progress Indicator - core/model.rs
//
// Core data types shared between the tail watcher, the sink, and the UI.
// No I/O, no threading: plain values only.

use std::fmt;
use std::path::PathBuf;

/// The single displayable value derived from the watched file.
///
/// Exactly one `StatusLine` is current at any time; every update replaces the
/// previous one entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusLine {
    /// Nothing has been received from the watcher yet.
    #[default]
    Initializing,
    /// The watched file did not exist and was created empty.
    Created(PathBuf),
    /// The subscription is active but the file holds no line yet.
    Watching(PathBuf),
    /// The watcher could not start. Terminal for that watcher instance.
    Error(String),
    /// The latest non-blank line of the file, trimmed.
    Line(String),
}

impl StatusLine {
    /// Build the terminal error status for a path that could not be opened
    /// or subscribed to.
    pub fn open_failed(path: &std::path::Path) -> Self {
        Self::Error(format!("Could not open file {}", path.display()))
    }

    /// Returns `true` for the terminal error variant.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The extracted file line, if this status carries one.
    pub fn line(&self) -> Option<&str> {
        match self {
            Self::Line(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializing => write!(f, "Waiting for updates..."),
            Self::Created(path) => write!(f, "Created log file: {}", path.display()),
            Self::Watching(path) => write!(f, "Watching: {}", path.display()),
            Self::Error(message) => write!(f, "Error: {message}"),
            Self::Line(text) => f.write_str(text),
        }
    }
}

/// What the path ensurer found (or did) before watching began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    /// The file was absent and has just been created empty.
    Created,
    /// The file already existed; its content was left untouched.
    Existing,
}

/// Lifecycle of a tail watcher.
///
/// ```text
/// Idle --start--> Opening --subscribed--> Watching
///                    |                       |
///                    +--open failed--> Error |
///                    |                       |
///                    +-------stop------> Stopped <--stop--+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Constructed, not started.
    Idle,
    /// Background open/subscribe in progress.
    Opening,
    /// Subscription active; updates flow.
    Watching,
    /// Open or subscribe failed. Terminal.
    Error,
    /// Stopped by the owner. Terminal.
    Stopped,
}

impl WatchState {
    /// Whether `stop()` has anything to tear down in this state.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Opening | Self::Watching)
    }
}

/// Messages sent from the background tail thread to the presentation thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchProgress {
    /// A new status to apply.
    Status(StatusLine),
    /// The file is open and the change subscription is active.
    Started,
    /// Open or subscribe failed; carries the user-visible error status.
    Failed(StatusLine),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_display_texts() {
        let p = Path::new("/tmp/p.log");
        assert_eq!(StatusLine::Initializing.to_string(), "Waiting for updates...");
        assert_eq!(
            StatusLine::Created(p.to_path_buf()).to_string(),
            "Created log file: /tmp/p.log"
        );
        assert_eq!(
            StatusLine::Watching(p.to_path_buf()).to_string(),
            "Watching: /tmp/p.log"
        );
        assert_eq!(StatusLine::Line("step 2".into()).to_string(), "step 2");
    }

    #[test]
    fn test_open_failed_message_names_path() {
        let status = StatusLine::open_failed(Path::new("/root/x.log"));
        assert!(status.is_error());
        assert_eq!(
            status.to_string(),
            "Error: Could not open file /root/x.log"
        );
    }

    #[test]
    fn test_only_opening_and_watching_are_active() {
        assert!(WatchState::Opening.is_active());
        assert!(WatchState::Watching.is_active());
        assert!(!WatchState::Idle.is_active());
        assert!(!WatchState::Error.is_active());
        assert!(!WatchState::Stopped.is_active());
    }
}
