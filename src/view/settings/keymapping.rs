use crate::model::settings::SENSITIVITY_RANGE;
use crate::model::SettingsData;
use crate::style;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, data: &mut SettingsData) {
    ui.horizontal(|ui| {
        ui.checkbox(&mut data.keymapping, "Keymapping")
            .on_hover_text("Translate keyboard input into touches using the app's keymap");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.checkbox(&mut data.mouse_mapping, "Mouse mapping")
                .on_hover_text("Use the mouse to control the camera in supported games");
        });
    });

    style::form_row(
        ui,
        format!("Mouse sensitivity: {:.0}", data.sensitivity),
        |ui| {
            ui.add_sized(
                [style::CONTROL_WIDTH, ui.spacing().interact_size.y],
                egui::Slider::new(&mut data.sensitivity, SENSITIVITY_RANGE).show_value(false),
            );
        },
    );
}
