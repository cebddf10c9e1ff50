// Progress Indicator - lib.rs
//
// Library entry point, exposing all non-GUI modules for integration testing
// and headless use (a `TailWatcher` works with any `StatusSink`).
//
// The eframe `App` lives in `gui.rs` next to `main.rs` and is not part of
// the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
