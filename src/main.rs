#![deny(missing_docs)]

//! Entry point for the splitprep desktop client.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use splitprep::config;
use splitprep::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use splitprep::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("splitprep")
        .with_inner_size([820.0, 760.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "splitprep",
        native_options,
        Box::new(|_cc| {
            let app = config::load_or_default()
                .map_err(|err| err.to_string())
                .and_then(|config| EguiApp::new(config).map_err(|err| err.to_string()));
            match app {
                Ok(app) => Ok(Box::new(app)),
                Err(message) => {
                    tracing::error!("Startup failed: {message}");
                    Ok(Box::new(LaunchError { message }))
                }
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start splitprep");
                ui.label(&self.message);
            });
        });
    }
}
