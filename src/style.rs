use eframe::egui;

// --- Window ---
pub const MIN_CONTENT_WIDTH: f32 = 450.0;
pub const MIN_CONTENT_HEIGHT: f32 = 200.0;

// --- Header ---
pub const APP_ICON_SIZE: f32 = 33.0;
pub const APP_ICON_RADIUS: u8 = 10;
pub const TITLE_SIZE: f32 = 20.0;

// --- Library list ---
pub const ROW_HEIGHT: f32 = 36.0;
pub const LIST_ICON_SIZE: f32 = 28.0;
pub const ICON_COL_WIDTH: f32 = 40.0;

// --- Form controls ---
pub const CONTROL_WIDTH: f32 = 250.0;
pub const STEPPER_FIELD_WIDTH: f32 = 125.0;
pub const MAX_CUSTOM_DIMENSION: i32 = 16384;

// --- Timing ---
pub const TOAST_TIMEOUT_SECS: u64 = 4;

// --- Helper functions ---

pub fn apply_theme(ctx: &egui::Context, dark: bool) {
    ctx.set_visuals(if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

/// Label on the left, control pushed to the right edge of the row.
pub fn form_row<R>(
    ui: &mut egui::Ui,
    label: impl Into<egui::WidgetText>,
    add_control: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), add_control)
            .inner
    })
    .inner
}

pub fn app_icon(ui: &mut egui::Ui, uri: Option<String>, size: f32) {
    match uri {
        Some(uri) => {
            ui.add(
                egui::Image::new(uri)
                    .fit_to_exact_size(egui::vec2(size, size))
                    .corner_radius(APP_ICON_RADIUS),
            );
        }
        None => {
            ui.add_sized([size, size], egui::Label::new(egui::RichText::new("📱").size(size * 0.7)));
        }
    }
}
