// Detail view: settings of one app, split into tabs

mod bypass;
mod graphics;
mod info;
mod keymapping;

use crate::model::PlayApp;
use crate::navigation::{DetailPage, PageAction};
use crate::state::{Notice, SettingsTab};
use crate::style;
use eframe::egui;
use graphics::CustomSize;
use std::sync::mpsc::Sender;

const FOOTER_HEIGHT: f32 = 36.0;

pub struct AppSettingsPage {
    app: PlayApp,
    title: String,
    tab: SettingsTab,
    custom_size: CustomSize,
    notices: Sender<Notice>,
    /// Edited values not yet written to disk
    unsaved: bool,
}

impl AppSettingsPage {
    pub fn new(app: PlayApp, notices: Sender<Notice>) -> Self {
        let title = format!("{} Settings", app.name());
        let custom_size = CustomSize::from_settings(&app.settings.data);
        Self {
            app,
            title,
            tab: SettingsTab::default(),
            custom_size,
            notices,
            unsaved: false,
        }
    }

    fn notify(&self, notice: Notice) {
        // The receiver lives as long as the app; a closed channel only
        // happens during shutdown.
        let _ = self.notices.send(notice);
    }

    fn save(&self) {
        if let Err(e) = self.app.settings.save() {
            tracing::error!(error = %e, "failed to save settings");
            self.notify(Notice::error(format!("Could not save settings: {e}")));
        }
    }

    /// Write pending edits once the pointer is released, so a dragged
    /// slider saves once instead of every frame.
    fn persist(&mut self, changed: bool, pointer_down: bool) {
        self.unsaved |= changed;
        if self.unsaved && !pointer_down {
            self.unsaved = false;
            self.save();
        }
    }

    fn reset_settings(&mut self) {
        match self.app.settings.reset() {
            Ok(()) => self.notify(Notice::notice("Settings reset to default")),
            Err(e) => self.notify(Notice::error(format!("Could not reset settings: {e}"))),
        }
    }

    fn reset_keymapping(&mut self) {
        match self.app.settings.reset_keymapping() {
            Ok(()) => self.notify(Notice::notice("Keymapping reset to default")),
            Err(e) => self.notify(Notice::error(format!("Could not reset keymapping: {e}"))),
        }
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            style::app_icon(ui, self.app.icon_uri(), style::APP_ICON_SIZE);
            ui.label(egui::RichText::new(&self.title).size(style::TITLE_SIZE).strong());
        });
    }

    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        let back_tab = egui::Modifiers::CTRL | egui::Modifiers::SHIFT;
        if ui.input_mut(|i| i.consume_key(back_tab, egui::Key::Tab)) {
            self.tab = self.tab.prev();
        } else if ui.input_mut(|i| i.consume_key(egui::Modifiers::CTRL, egui::Key::Tab)) {
            self.tab = self.tab.next();
        }
        ui.horizontal(|ui| {
            for tab in SettingsTab::ALL {
                ui.selectable_value(&mut self.tab, tab, tab.label());
            }
        });
    }

    fn render_tab(&mut self, ui: &mut egui::Ui) {
        let screen = ui
            .ctx()
            .input(|i| i.viewport().monitor_size)
            .map(|size| (size.x as i32, size.y as i32));
        let data = &mut self.app.settings.data;

        egui::ScrollArea::vertical()
            .id_salt(("settings_tab", self.tab.label()))
            .auto_shrink([false, false])
            .max_height((ui.available_height() - FOOTER_HEIGHT).max(style::MIN_CONTENT_HEIGHT))
            .show(ui, |ui| {
                ui.set_min_width(style::MIN_CONTENT_WIDTH);
                ui.add_space(8.0);
                match self.tab {
                    SettingsTab::Keymapping => keymapping::show(ui, data),
                    SettingsTab::Graphics => graphics::show(ui, data, &mut self.custom_size, screen),
                    SettingsTab::Bypass => bypass::show(ui, data),
                    SettingsTab::Info => info::show(ui, &self.app.info),
                }
            });
    }

    /// `editing` is whether a field had keyboard focus when the frame
    /// started; Enter then commits the field instead of confirming the page.
    fn render_footer(&mut self, ui: &mut egui::Ui, editing: bool) -> PageAction {
        let mut action = PageAction::None;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let ok = ui.button("OK");
            let enter = !editing && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ok.clicked() || enter {
                action = PageAction::Dismiss;
            }
            if ui.button("Reset Keymapping").clicked() {
                self.reset_keymapping();
                action = PageAction::Dismiss;
            }
            if ui.button("Reset Settings").clicked() {
                self.reset_settings();
                action = PageAction::Dismiss;
            }
        });
        action
    }
}

impl DetailPage for AppSettingsPage {
    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, ui: &mut egui::Ui) -> PageAction {
        let before = self.app.settings.data.clone();
        let editing = ui.ctx().wants_keyboard_input();

        let inner = egui::Frame::new().inner_margin(8.0).show(ui, |ui| {
            self.render_header(ui);
            ui.add_space(4.0);
            self.render_tab_bar(ui);
            ui.separator();
            self.render_tab(ui);
            ui.separator();
            self.render_footer(ui, editing)
        });

        let changed = self.app.settings.data != before;
        let pointer_down = ui.input(|i| i.pointer.any_down());
        self.persist(changed, pointer_down);
        inner.inner
    }
}

impl Drop for AppSettingsPage {
    fn drop(&mut self) {
        if self.unsaved {
            self.save();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppInfo, AppSettings};
    use std::sync::mpsc;

    fn page_in(dir: &std::path::Path) -> (AppSettingsPage, mpsc::Receiver<Notice>) {
        let app = PlayApp {
            info: AppInfo {
                display_name: "Genshin".into(),
                ..Default::default()
            },
            icon: None,
            settings: AppSettings::load(dir, "com.example.game").expect("load"),
        };
        let (sender, receiver) = mpsc::channel();
        (AppSettingsPage::new(app, sender), receiver)
    }

    fn enter_pressed() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Runs one frame of `page` with Enter pressed, optionally with a text
    /// field focused beforehand.
    fn press_enter(page: &mut AppSettingsPage, field_focused: bool) -> PageAction {
        let ctx = egui::Context::default();
        let mut action = PageAction::None;
        let input = egui::RawInput {
            events: vec![enter_pressed()],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            if field_focused {
                ctx.memory_mut(|m| m.request_focus(egui::Id::new("custom_width")));
            }
            egui::CentralPanel::default().show(ctx, |ui| action = page.ui(ui));
        });
        action
    }

    #[test]
    fn test_title_uses_app_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (page, _notices) = page_in(dir.path());
        assert_eq!(page.title(), "Genshin Settings");
    }

    #[test]
    fn test_enter_confirms_page() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (mut page, _notices) = page_in(dir.path());
        assert_eq!(press_enter(&mut page, false), PageAction::Dismiss);
    }

    #[test]
    fn test_enter_in_focused_field_keeps_page_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (mut page, _notices) = page_in(dir.path());
        assert_eq!(press_enter(&mut page, true), PageAction::None);
    }

    #[test]
    fn test_edits_are_saved_when_pointer_is_released() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (mut page, notices) = page_in(dir.path());
        let path = page.app.settings.path.clone();

        page.app.settings.data.sensitivity = 75.0;
        page.persist(true, true);
        page.app.settings.data.sensitivity = 80.0;
        page.persist(true, true);
        assert!(!path.exists());

        page.persist(false, false);
        assert!(path.exists());
        let saved = AppSettings::load(dir.path(), "com.example.game").expect("reload");
        assert_eq!(saved.data.sensitivity, 80.0);
        assert!(notices.try_recv().is_err());
    }

    #[test]
    fn test_pending_edits_are_saved_on_drop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (mut page, _notices) = page_in(dir.path());
        page.app.settings.data.bypass = true;
        page.persist(true, true);
        drop(page);

        let saved = AppSettings::load(dir.path(), "com.example.game").expect("reload");
        assert!(saved.data.bypass);
    }
}
