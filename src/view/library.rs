// Root view: installed apps

use crate::state::AppLibrary;
use crate::style;
use eframe::egui;

/// Draw the app list. Returns the index of the app the user opened.
pub fn show(ui: &mut egui::Ui, library: &AppLibrary) -> Option<usize> {
    ui.add_space(4.0);
    ui.heading("Apps");
    ui.separator();

    if library.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No apps installed");
        });
        return None;
    }

    let mut opened = None;
    egui::ScrollArea::vertical()
        .id_salt("library_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            use egui_extras::{Column, TableBuilder};
            TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(style::ICON_COL_WIDTH))
                .column(Column::remainder().clip(true))
                .column(Column::auto().at_least(60.0))
                .body(|body| {
                    body.rows(style::ROW_HEIGHT, library.len(), |mut row| {
                        let index = row.index();
                        let app = &library.apps[index];

                        row.col(|ui| {
                            style::app_icon(ui, app.icon_uri(), style::LIST_ICON_SIZE);
                        });
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                if ui
                                    .add(egui::Label::new(egui::RichText::new(app.name()).strong())
                                        .truncate()
                                        .sense(egui::Sense::click()))
                                    .clicked()
                                {
                                    opened = Some(index);
                                }
                                ui.add(egui::Label::new(
                                    egui::RichText::new(&app.info.bundle_identifier).small().weak(),
                                ).truncate());
                            });
                        });
                        row.col(|ui| {
                            if ui.button("Settings").clicked() {
                                opened = Some(index);
                            }
                        });
                    });
                });
        });
    opened
}
