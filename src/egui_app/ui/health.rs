use super::EguiApp;
use super::style;
use crate::egui_app::view_model::HealthRow;
use eframe::egui::{self, RichText, Ui};

impl EguiApp {
    pub(super) fn render_health(&mut self, ui: &mut Ui, rows: &[HealthRow]) {
        let palette = style::palette();
        style::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Backend Status").strong());
            ui.add_space(4.0);
            egui::Grid::new("health_rows")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for row in rows {
                        ui.label(RichText::new(row.label).color(palette.text_muted));
                        ui.label(&row.value);
                        ui.end_row();
                    }
                });
        });
    }
}
