use super::EguiApp;
use super::style;
use crate::egui_app::view_model::WorkflowView;
use eframe::egui::{self, RichText, Ui};

impl EguiApp {
    pub(super) fn render_upload(&mut self, ui: &mut Ui, view: &WorkflowView) {
        let palette = style::palette();
        let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        let mut frame = style::section_frame();
        if hovering {
            frame = frame.stroke(egui::Stroke::new(1.5, palette.accent_ice));
        }
        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Upload Dataset").strong());
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let browse = ui.add_enabled(!view.loading, egui::Button::new("Browse…"));
                if browse.clicked() {
                    self.controller.upload_via_dialog();
                }
                let hint = if view.loading {
                    "Uploading..."
                } else {
                    "or drop a CSV file onto the window"
                };
                ui.label(RichText::new(hint).color(palette.text_muted));
            });

            let Some(summary) = &view.upload else {
                return;
            };
            ui.add_space(8.0);
            egui::Grid::new("upload_summary")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("File").color(palette.text_muted));
                    ui.label(&summary.file_name);
                    ui.end_row();
                    ui.label(RichText::new("Status").color(palette.text_muted));
                    ui.label(RichText::new(&summary.info).color(palette.success));
                    ui.end_row();
                    ui.label(RichText::new("Encoding").color(palette.text_muted));
                    ui.label(&summary.encoding);
                    ui.end_row();
                    ui.label(RichText::new("Shape").color(palette.text_muted));
                    ui.label(&summary.shape);
                    ui.end_row();
                    ui.label(RichText::new("Columns").color(palette.text_muted));
                    ui.add(egui::Label::new(&summary.columns).wrap());
                    ui.end_row();
                });
        });
    }
}
