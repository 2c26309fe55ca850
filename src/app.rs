use crate::config::Config;
use crate::navigation::{with_animation, Animation, DetailView, StackNavigation, TransitionKind};
use crate::state::{AppLibrary, Notice, ToastManager};
use crate::style;
use crate::view;
use crate::view::settings::AppSettingsPage;
use eframe::egui;
use std::time::{Duration, Instant};

const STACK_ID: &str = "app_settings_stack";

pub struct SettingsApp {
    library: AppLibrary,
    transition: TransitionKind,

    // Navigation
    showing_detail: bool,
    detail: DetailView,

    toasts: ToastManager,
}

impl SettingsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        style::apply_theme(&cc.egui_ctx, config.is_dark());

        let mut toasts = ToastManager::new(Duration::from_secs(style::TOAST_TIMEOUT_SECS));
        let library = match load_library(config) {
            Ok(library) => library,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load app library");
                toasts.show(Notice::error(format!("Could not load apps: {e}")));
                AppLibrary::empty()
            }
        };

        Self {
            library,
            transition: config.navigation.transition.kind(),
            showing_detail: false,
            detail: DetailView::empty(),
            toasts,
        }
    }

    /// Push the settings page of the app at `index`.
    fn open_settings(&mut self, ctx: &egui::Context, index: usize) {
        let Some(app) = self.library.apps.get(index) else {
            return;
        };
        let mut app = app.clone();
        if let Err(e) = app.settings.reload() {
            tracing::warn!(error = %e, "keeping previously loaded settings");
        }
        tracing::info!(app = app.name(), "opening settings");

        let page = AppSettingsPage::new(app, self.toasts.sender());
        let showing_detail = &mut self.showing_detail;
        let detail = &mut self.detail;
        let push = move || {
            *detail = DetailView::new(page);
            *showing_detail = true;
        };
        if self.transition.is_default() {
            with_animation(ctx, Animation::spring(), push);
        } else {
            push();
        }
    }

    fn navigation(&mut self) -> StackNavigation<'_> {
        StackNavigation::new(&mut self.showing_detail, &mut self.detail, self.transition)
            .id_salt(STACK_ID)
    }
}

fn load_library(config: &Config) -> crate::error::Result<AppLibrary> {
    let apps_file = config.apps_file()?;
    let settings_dir = config.settings_dir()?;
    AppLibrary::load(&apps_file, &settings_dir)
}

impl eframe::App for SettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.toasts.update(Instant::now());
        // Focus as it was before this frame's widgets ran; a field that
        // handles Escape itself drops focus while rendering.
        let editing = ctx.wants_keyboard_input();

        let mut opened = None;
        let response = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let library = &self.library;
                StackNavigation::new(&mut self.showing_detail, &mut self.detail, self.transition)
                    .id_salt(STACK_ID)
                    .show(ui, |ui| opened = view::library::show(ui, library))
            })
            .inner;

        if response.back_activated {
            tracing::info!("closed settings");
        }
        // Escape acts as the back control, unless a field is being edited.
        let escape = response.composition.back_control.is_some()
            && !editing
            && ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape));
        // A page can ask to close in the same frame Back was pressed; by then
        // the payload is already gone.
        if (response.dismiss_requested || escape) && !self.detail.is_empty() {
            self.navigation().navigate_back(ctx);
        }
        if let Some(index) = opened {
            self.open_settings(ctx, index);
        }

        view::render_toasts(ctx, &self.toasts);
        if !self.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
