// Progress Indicator - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (display state), util (constants), egui.
// Must NOT depend on: platform, direct I/O.

pub mod panels;
pub mod theme;
