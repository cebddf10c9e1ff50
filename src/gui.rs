// Progress Indicator - gui.rs
//
// Top-level eframe::App implementation.
// Applies queued watcher updates each frame and renders the current screen.

use crate::app::state::DisplayState;
use crate::app::tail::TailWatcher;
use crate::ui;

/// What the window shows for this run.
pub enum Screen {
    /// No usable `--watchfile=PATH`; show help.
    Usage,
    /// Watching a file.
    Progress(TailWatcher<DisplayState>),
}

/// The Progress Indicator application.
pub struct ProgressApp {
    screen: Screen,
    font_size: f32,
}

impl ProgressApp {
    pub fn new(screen: Screen, font_size: f32) -> Self {
        Self { screen, font_size }
    }
}

impl eframe::App for ProgressApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let font_size = self.font_size;
        match &mut self.screen {
            Screen::Usage => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::panels::usage::render(ui);
                });
            }
            Screen::Progress(watcher) => {
                // The watcher's waker requests a repaint whenever it queues
                // something, so no timed repaint is needed here.
                watcher.pump();
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::panels::progress::render(ui, watcher.sink(), font_size);
                });
            }
        }
    }

    /// Called by eframe when the window is about to close: the only
    /// teardown path for the watcher.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Screen::Progress(watcher) = &mut self.screen {
            watcher.stop();
        }
    }
}
