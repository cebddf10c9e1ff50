// Progress Indicator - ui/panels/mod.rs

pub mod progress;
pub mod usage;
