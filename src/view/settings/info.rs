use crate::model::AppInfo;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, info: &AppInfo) {
    egui::Grid::new("info_grid")
        .striped(true)
        .num_columns(2)
        .spacing([40.0, 6.0])
        .show(ui, |ui| {
            for (label, value) in info.rows() {
                ui.label(label);
                ui.add(egui::Label::new(value).truncate());
                ui.end_row();
            }
        });
}
