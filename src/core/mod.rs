// Progress Indicator - core/mod.rs
//
// Core layer: data model and pure line extraction.
// Dependencies: standard library only.
// Must NOT depend on: app, ui, platform.

pub mod extract;
pub mod model;
