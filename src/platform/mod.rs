// Progress Indicator - platform/mod.rs
//
// Platform abstraction layer: filesystem preparation and config loading.
// Dependencies: core (plain model types), util, directories crate.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
