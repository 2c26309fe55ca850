mod app;
mod config;
mod error;
mod model;
mod navigation;
mod state;
mod style;
mod view;

use app::SettingsApp;
use config::Config;
use eframe::egui;
use tracing_subscriber::EnvFilter;

const APP_TITLE: &str = "PlayCover Settings";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    if let Err(e) = Config::create_default() {
        tracing::warn!(error = %e, "could not write default configuration");
    }
    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([
                style::MIN_CONTENT_WIDTH + 32.0,
                style::MIN_CONTENT_HEIGHT + 160.0,
            ])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(SettingsApp::new(cc, &config)))),
    )
}
