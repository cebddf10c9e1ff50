// Progress Indicator - app/state.rs
//
// Presentation-side state. Owned by the tail watcher as its sink and read
// by the UI each frame.

use crate::app::sink::StatusSink;
use crate::core::model::StatusLine;

/// What the progress window shows.
#[derive(Debug)]
pub struct DisplayState {
    /// The one current status.
    pub current: StatusLine,

    /// True between `on_start` and `on_stop`.
    pub live: bool,

    /// Number of statuses applied so far.
    pub update_count: u64,
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            current: StatusLine::Initializing,
            live: false,
            update_count: 0,
        }
    }

    /// Text for the message box.
    pub fn message(&self) -> String {
        self.current.to_string()
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for DisplayState {
    fn on_status(&mut self, status: StatusLine) {
        if status.is_error() {
            tracing::warn!(status = %status, "Watcher reported an error");
        }
        self.current = status;
        self.update_count += 1;
    }

    fn on_start(&mut self) {
        self.live = true;
    }

    fn on_stop(&mut self) {
        self.live = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_for_updates() {
        let state = DisplayState::new();
        assert_eq!(state.message(), "Waiting for updates...");
        assert!(!state.live);
        assert_eq!(state.update_count, 0);
    }

    #[test]
    fn test_status_replaces_previous() {
        let mut state = DisplayState::new();
        state.on_status(StatusLine::Line("step 1".into()));
        state.on_status(StatusLine::Line("step 2".into()));
        assert_eq!(state.message(), "step 2");
        assert_eq!(state.update_count, 2);
    }

    #[test]
    fn test_lifecycle_hooks_toggle_live() {
        let mut state = DisplayState::new();
        state.on_start();
        assert!(state.live);
        state.on_stop();
        assert!(!state.live);
    }
}
