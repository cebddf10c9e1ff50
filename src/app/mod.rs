// Progress Indicator - app/mod.rs
//
// Application layer: argument handling, the tail watcher, and the sink it
// feeds.
// Dependencies: core, platform, util.
// Must NOT depend on: ui.

pub mod args;
pub mod sink;
pub mod state;
pub mod tail;
