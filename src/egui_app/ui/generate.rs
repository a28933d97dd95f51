use super::EguiApp;
use super::style;
use crate::egui_app::view_model::GenerateView;
use eframe::egui::{self, RichText, Ui};

impl EguiApp {
    pub(super) fn render_generate(&mut self, ui: &mut Ui, view: &GenerateView, loading: bool) {
        let palette = style::palette();
        style::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Generate Files").strong());
            ui.add_space(4.0);
            egui::Grid::new("split_summary")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Target column").color(palette.text_muted));
                    ui.label(&view.target_column);
                    ui.end_row();
                    ui.label(RichText::new("Train samples").color(palette.text_muted));
                    ui.label(view.train_samples.to_string());
                    ui.end_row();
                    ui.label(RichText::new("Test samples").color(palette.text_muted));
                    ui.label(view.test_samples.to_string());
                    ui.end_row();
                    ui.label(RichText::new("Total samples").color(palette.text_muted));
                    ui.label(view.total_samples.to_string());
                    ui.end_row();
                });
            if !view.note.is_empty() {
                ui.label(RichText::new(&view.note).italics().color(palette.text_muted));
            }

            if !view.value_counts.is_empty() {
                ui.add_space(6.0);
                ui.collapsing("Target value counts", |ui| {
                    egui::Grid::new("value_counts")
                        .num_columns(2)
                        .striped(true)
                        .show(ui, |ui| {
                            for (value, count) in &view.value_counts {
                                ui.label(value);
                                ui.label(count.to_string());
                                ui.end_row();
                            }
                        });
                });
            }

            ui.add_space(8.0);
            if ui
                .add_enabled(!loading, egui::Button::new(view.submit_label))
                .clicked()
            {
                self.controller.generate_files();
            }
        });
    }
}
