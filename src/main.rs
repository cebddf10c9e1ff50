// Progress Indicator - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing (`--watchfile=PATH`, or the usage screen)
// 2. Optional config.toml and logging initialisation
// 3. Preparing the watched path
// 4. eframe GUI launch with the tail watcher wired to egui repaints

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

pub use progress_indicator::app;
pub use progress_indicator::core;
pub use progress_indicator::platform;
pub use progress_indicator::ui;
pub use progress_indicator::util;

use crate::app::args::LaunchMode;
use crate::app::state::DisplayState;
use crate::app::tail::TailWatcher;
use crate::core::model::FileState;
use crate::util::constants;
use std::sync::Arc;

fn main() {
    let launch = app::args::parse_args(std::env::args_os());

    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_file());

    util::logging::init(launch.debug, config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = launch.debug,
        "ProgressIndicator starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Resolve the screen before the window exists; the watcher itself is
    // built inside the eframe creator so it can wake the egui context.
    let watch = match launch.mode {
        LaunchMode::Watch(path) => {
            let origin = match platform::fs::ensure_path(&path) {
                Ok(state) => state,
                Err(e) => {
                    // Opening will fail next and surface the error in the window.
                    tracing::warn!(error = %e, "Could not prepare watch file");
                    FileState::Existing
                }
            };
            Some((path, origin))
        }
        LaunchMode::Usage { reason } => {
            tracing::info!(reason = %reason, "Showing usage");
            print!("{}", app::args::usage_text());
            None
        }
    };

    let (width, height) = if watch.is_some() {
        (config.window_width, config.window_height)
    } else {
        (constants::USAGE_WINDOW_WIDTH, constants::USAGE_WINDOW_HEIGHT)
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(constants::APP_NAME)
        .with_inner_size([width, height]);
    if watch.is_some() {
        viewport = viewport
            .with_min_inner_size([constants::MIN_WINDOW_WIDTH, constants::MIN_WINDOW_HEIGHT])
            .with_max_inner_size([constants::MAX_WINDOW_WIDTH, constants::MAX_WINDOW_HEIGHT]);
    }
    if config.always_on_top {
        viewport = viewport.with_always_on_top();
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });

            let screen = match watch {
                Some((path, origin)) => {
                    let repaint_ctx = cc.egui_ctx.clone();
                    let mut watcher = TailWatcher::new(path, origin, DisplayState::new())
                        .with_waker(Arc::new(move || repaint_ctx.request_repaint()));
                    watcher.start();
                    gui::Screen::Progress(watcher)
                }
                None => gui::Screen::Usage,
            };
            Ok(Box::new(gui::ProgressApp::new(screen, font_size)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch {} window: {e}", constants::APP_NAME);
        std::process::exit(1);
    }
}
