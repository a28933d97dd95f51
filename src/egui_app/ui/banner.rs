use super::EguiApp;
use super::style;
use eframe::egui::{self, RichText, Ui};

impl EguiApp {
    /// Error banner with a dismiss button.
    pub(super) fn render_banner(&mut self, ui: &mut Ui, message: &str) {
        let palette = style::palette();
        style::banner_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(message).color(palette.text_primary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        self.controller.dismiss_error();
                    }
                });
            });
        });
    }
}
