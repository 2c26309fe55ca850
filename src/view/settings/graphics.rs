use crate::model::resolution::{self, AspectRatio, ResolutionMode};
use crate::model::settings::{DEVICE_MODELS, REFRESH_RATES};
use crate::model::SettingsData;
use crate::style;
use eframe::egui;

/// Custom resolution fields, edited before they are written to the settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CustomSize {
    pub width: i32,
    pub height: i32,
}

impl CustomSize {
    pub fn from_settings(data: &SettingsData) -> Self {
        Self {
            width: data.window_width,
            height: data.window_height,
        }
    }
}

/// Picker state the stored window size depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ResolutionInputs {
    mode: ResolutionMode,
    aspect: AspectRatio,
    custom: CustomSize,
}

impl ResolutionInputs {
    fn capture(data: &SettingsData, custom: CustomSize) -> Self {
        Self {
            mode: data.resolution,
            aspect: data.aspect_ratio,
            custom,
        }
    }
}

/// Store the window size for the current picker state.
pub fn apply_resolution(data: &mut SettingsData, custom: CustomSize, screen: Option<(i32, i32)>) {
    let (width, height) = resolution::resolve(
        data.resolution,
        data.aspect_ratio,
        (custom.width, custom.height),
        screen,
    );
    data.window_width = width;
    data.window_height = height;
}

pub fn show(
    ui: &mut egui::Ui,
    data: &mut SettingsData,
    custom: &mut CustomSize,
    screen: Option<(i32, i32)>,
) {
    let before = ResolutionInputs::capture(data, *custom);

    style::form_row(ui, "iOS device:", |ui| {
        egui::ComboBox::from_id_salt("ios_device")
            .width(style::CONTROL_WIDTH)
            .selected_text(data.device_label().to_string())
            .show_ui(ui, |ui| {
                for (id, label) in DEVICE_MODELS {
                    ui.selectable_value(&mut data.ios_device_model, id.to_string(), label);
                }
            });
    });

    style::form_row(ui, "Adaptive resolution:", |ui| {
        egui::ComboBox::from_id_salt("adaptive_resolution")
            .width(style::CONTROL_WIDTH)
            .selected_text(data.resolution.label())
            .show_ui(ui, |ui| {
                for mode in ResolutionMode::ALL {
                    ui.selectable_value(&mut data.resolution, mode, mode.label());
                }
            })
            .response
            .on_hover_text("Resolution the app renders at; Auto follows the display");
    });

    if data.resolution == ResolutionMode::Custom {
        ui.horizontal(|ui| {
            ui.label("Width:");
            stepper(ui, &mut custom.width);
            ui.add_space(16.0);
            ui.label("Height:");
            stepper(ui, &mut custom.height);
        });
    } else if data.resolution.uses_aspect_ratio() {
        style::form_row(ui, "Aspect ratio:", |ui| {
            // right-to-left layout, so add in reverse
            for aspect in AspectRatio::ALL.into_iter().rev() {
                ui.radio_value(&mut data.aspect_ratio, aspect, aspect.label());
            }
        });
    }

    ui.horizontal(|ui| {
        ui.label("Refresh rate:");
        for rate in REFRESH_RATES {
            ui.selectable_value(&mut data.refresh_rate, rate, format!("{rate} Hz"));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.checkbox(&mut data.disable_timeout, "Disable display sleep")
                .on_hover_text("Keep the display awake while the app is running");
        });
    });

    if ResolutionInputs::capture(data, *custom) != before {
        apply_resolution(data, *custom, screen);
    }
}

fn stepper(ui: &mut egui::Ui, value: &mut i32) {
    ui.add_sized(
        [style::STEPPER_FIELD_WIDTH, ui.spacing().interact_size.y],
        egui::DragValue::new(value).range(1..=style::MAX_CUSTOM_DIMENSION),
    );
    if ui.small_button("-").clicked() {
        *value = (*value - 1).max(1);
    }
    if ui.small_button("+").clicked() {
        *value = (*value + 1).min(style::MAX_CUSTOM_DIMENSION);
    }
}
