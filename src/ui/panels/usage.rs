// Progress Indicator - ui/panels/usage.rs
//
// Usage view: shown instead of the progress view when no file was given.

use crate::ui::theme;
use crate::util::constants;

/// Render the usage/help view.
pub fn render(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new(constants::APP_NAME)
            .size(theme::HEADING_SIZE)
            .strong(),
    );
    ui.label(egui::RichText::new(constants::APP_TAGLINE).weak());

    ui.separator();

    ui.label(egui::RichText::new("Usage:").strong());
    ui.indent("usage_line", |ui| {
        ui.label(egui::RichText::new(constants::USAGE_LINE).monospace());
    });

    ui.add_space(theme::SECTION_SPACING);

    ui.label(egui::RichText::new("Example:").strong());
    ui.indent("usage_example", |ui| {
        ui.label(egui::RichText::new(constants::USAGE_EXAMPLE).monospace());
    });

    ui.separator();

    ui.label(egui::RichText::new(constants::EXIT_HINT).small().weak());
}
