// Progress Indicator - ui/panels/progress.rs
//
// Progress view: header row plus the current status in a boxed monospace label.

use crate::app::state::DisplayState;
use crate::ui::theme;

/// Render the progress view for the current display state.
pub fn render(ui: &mut egui::Ui, state: &DisplayState, font_size: f32) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("\u{23f1}")
                .size(theme::HEADING_SIZE)
                .color(theme::ACCENT),
        );
        ui.label(
            egui::RichText::new("Progress")
                .size(theme::HEADING_SIZE)
                .strong(),
        );
        if state.live {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(" \u{25cf} LIVE ")
                        .small()
                        .strong()
                        .color(theme::LIVE_TEXT)
                        .background_color(theme::LIVE_BG),
                );
            });
        }
    });

    ui.add_space(theme::HEADER_SPACING);

    let mut text = egui::RichText::new(state.message())
        .monospace()
        .size(font_size);
    if state.current.is_error() {
        text = text.color(theme::ERROR_TEXT);
    }

    egui::Frame::group(ui.style())
        .fill(theme::MESSAGE_BG)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(text);
        });
}
