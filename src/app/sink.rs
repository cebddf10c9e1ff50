// Progress Indicator - app/sink.rs
//
// The notification interface between the tail watcher and whatever renders
// its output. Calls always come from the thread that owns the watcher, in
// the order the updates were produced, and never overlap.

use crate::core::model::StatusLine;

/// Consumer of status updates.
pub trait StatusSink {
    /// A new current status. Replaces the previous one entirely.
    fn on_status(&mut self, status: StatusLine);

    /// The file is open and change notifications are flowing.
    fn on_start(&mut self) {}

    /// The watcher was stopped by its owner. No `on_status` follows.
    fn on_stop(&mut self) {}
}

/// A `Vec` records every update in order; handy for headless use and tests.
impl StatusSink for Vec<StatusLine> {
    fn on_status(&mut self, status: StatusLine) {
        self.push(status);
    }
}
