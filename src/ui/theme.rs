// Progress Indicator - ui/theme.rs
//
// Colours and layout constants. No dependencies on app state or business logic.

use egui::Color32;

/// Header clock glyph colour.
pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// LIVE badge colours.
pub const LIVE_TEXT: Color32 = Color32::from_rgb(34, 197, 94); // Green 500
pub const LIVE_BG: Color32 = Color32::from_rgba_premultiplied(34, 197, 94, 30);

/// Error status text colour.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Subtle grey fill behind the status message.
pub const MESSAGE_BG: Color32 = Color32::from_rgba_premultiplied(128, 128, 128, 26);

/// Layout constants.
pub const HEADER_SPACING: f32 = 12.0;
pub const SECTION_SPACING: f32 = 8.0;
pub const HEADING_SIZE: f32 = 16.0;
