//! egui renderer for the dataset-preparation window.

mod banner;
mod configuration;
mod downloads;
mod generate;
mod health;
pub mod style;
mod upload;

use std::time::Duration;

use eframe::egui::{self, RichText, Ui};

use crate::backend::BackendError;
use crate::config::AppConfig;
use crate::egui_app::controller::EguiController;
use crate::egui_app::view_model::WorkflowView;
use crate::logging;

/// Minimum viewport size in logical points.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(640.0, 480.0);

const PENDING_REPAINT: Duration = Duration::from_millis(100);
const CONTENT_WIDTH: f32 = 760.0;

/// Renders the workflow panels and forwards user actions to the controller.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app against the configured backend and fetch health.
    pub fn new(config: AppConfig) -> Result<Self, BackendError> {
        Ok(Self::with_controller(EguiController::from_config(config)?))
    }

    pub fn with_controller(mut controller: EguiController) -> Self {
        controller.start();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// A dropped file is uploaded exactly like a picked one.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|file| file.path) {
            self.controller.upload_file(path);
        }
    }

    fn render_header(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Dataset Preparation").color(palette.accent_mint));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Refresh status").clicked() {
                    self.controller.refresh_health();
                }
            });
        });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let status = &self.controller.ui.status;
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&status.badge_label).color(status.badge_color).strong());
                let text = ui.label(RichText::new(&status.text).color(palette.text_muted));
                if let Some(path) = logging::current_log_file() {
                    text.on_hover_text(format!("Log file: {}", path.display()));
                }
            });
        });
    }

    fn render_workflow(&mut self, ui: &mut Ui, view: &WorkflowView) {
        self.render_upload(ui, view);
        if let Some(rows) = &view.health {
            ui.add_space(10.0);
            self.render_health(ui, rows);
        }
        if let Some(configuration) = &view.configuration {
            ui.add_space(10.0);
            self.render_configuration(ui, configuration, view.loading);
        }
        if let Some(generate) = &view.generate {
            ui.add_space(10.0);
            self.render_generate(ui, generate, view.loading);
        }
        if let Some(downloads) = &view.downloads {
            ui.add_space(10.0);
            self.render_downloads(ui, downloads);
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.handle_dropped_files(ctx);

        let view = self.controller.view();
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("workflow")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_WIDTH);
                        ui.vertical(|ui| {
                            self.render_header(ui);
                            if let Some(message) = &view.error {
                                ui.add_space(6.0);
                                self.render_banner(ui, message);
                            }
                            ui.add_space(10.0);
                            self.render_workflow(ui, &view);
                        });
                    });
                });
        });

        if self.controller.has_pending_work() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
