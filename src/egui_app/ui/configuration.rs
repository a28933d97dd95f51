use super::EguiApp;
use super::style;
use crate::egui_app::view_model::ConfigurationView;
use crate::workflow::{MAX_TEST_FRACTION, MIN_TEST_FRACTION, TEST_FRACTION_STEP};
use eframe::egui::{self, RichText, Ui};

impl EguiApp {
    /// Target, split and label form plus the Set Details button.
    pub(super) fn render_configuration(
        &mut self,
        ui: &mut Ui,
        view: &ConfigurationView,
        loading: bool,
    ) {
        let palette = style::palette();
        style::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Configuration").strong());
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Target column");
                ui.add(
                    egui::TextEdit::singleline(&mut self.controller.ui.form.target_column)
                        .hint_text("e.g. label")
                        .desired_width(240.0),
                );
            });
            let mut picked = None;
            ui.horizontal_wrapped(|ui| {
                for column in &view.columns {
                    let selected = self.controller.ui.form.target_column.trim() == column;
                    if ui.add(egui::Button::new(column).selected(selected)).clicked() {
                        picked = Some(column.clone());
                    }
                }
            });
            if let Some(column) = picked {
                self.controller.pick_target_column(&column);
            }
            if view.unknown_target {
                ui.label(
                    RichText::new("This column is not in the uploaded file.")
                        .color(palette.warning),
                );
            }

            ui.add_space(6.0);
            ui.label(&view.test_size_label);
            ui.add(
                egui::Slider::new(
                    &mut self.controller.ui.form.test_fraction,
                    MIN_TEST_FRACTION..=MAX_TEST_FRACTION,
                )
                .step_by(TEST_FRACTION_STEP)
                .show_value(false),
            );

            ui.add_space(6.0);
            let form = &mut self.controller.ui.form;
            ui.horizontal(|ui| {
                ui.checkbox(&mut form.public_leaderboard_enabled, "Public leaderboard");
                ui.add_enabled(
                    form.public_leaderboard_enabled,
                    egui::DragValue::new(&mut form.public_leaderboard)
                        .range(0.0..=1.0)
                        .speed(0.01)
                        .max_decimals(2),
                );
            });
            ui.checkbox(&mut form.binary, "Binary classification");
            if form.binary {
                egui::Grid::new("binary_labels")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Positive label");
                        ui.text_edit_singleline(&mut form.positive_label);
                        ui.end_row();
                        ui.label("Negative label");
                        ui.text_edit_singleline(&mut form.negative_label);
                        ui.end_row();
                        ui.label("Replace label");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.replace_label)
                                .hint_text("optional"),
                        );
                        ui.end_row();
                    });
            }

            ui.add_space(8.0);
            if ui
                .add_enabled(!loading, egui::Button::new(view.submit_label))
                .clicked()
            {
                self.controller.submit_details();
            }
        });
    }
}
