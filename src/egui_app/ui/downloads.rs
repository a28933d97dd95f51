use super::EguiApp;
use super::style;
use crate::egui_app::view_model::DownloadView;
use eframe::egui::{self, RichText, Ui};

impl EguiApp {
    pub(super) fn render_downloads(&mut self, ui: &mut Ui, view: &DownloadView) {
        let palette = style::palette();
        style::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Download Files").strong());
            ui.add_space(4.0);

            let mut requested = None;
            egui::Grid::new("download_rows")
                .num_columns(3)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for row in &view.rows {
                        ui.label(&row.filename);
                        let label = if row.in_progress {
                            "Downloading..."
                        } else {
                            "Download"
                        };
                        if ui
                            .add_enabled(!row.in_progress, egui::Button::new(label))
                            .clicked()
                        {
                            requested = Some(row.filename.clone());
                        }
                        match &row.saved_to {
                            Some(path) => ui.label(
                                RichText::new(format!("Saved to {}", path.display()))
                                    .color(palette.success),
                            ),
                            None => ui.label(""),
                        };
                        ui.end_row();
                    }
                });
            if let Some(filename) = requested {
                self.controller.download(&filename);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let folder = view
                    .folder
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "No download folder".to_string());
                ui.label(RichText::new(folder).color(palette.text_muted));
                if ui.button("Change folder…").clicked() {
                    self.controller.choose_download_folder();
                }
                if ui
                    .add_enabled(view.folder.is_some(), egui::Button::new("Open folder"))
                    .clicked()
                {
                    self.controller.open_download_folder();
                }
            });
        });
    }
}
