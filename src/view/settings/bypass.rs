use crate::model::SettingsData;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, data: &mut SettingsData) {
    ui.checkbox(&mut data.bypass, "Jailbreak bypass")
        .on_hover_text("Hide jailbreak and sideloading indicators from the app");
}
