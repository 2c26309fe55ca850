pub mod library;
pub mod settings;

use crate::state::{NoticeKind, ToastManager};
use eframe::egui;

/// Stack toasts in the bottom-right corner, newest last.
pub fn render_toasts(ctx: &egui::Context, toasts: &ToastManager) {
    if toasts.is_empty() {
        return;
    }
    egui::Area::new("toasts".into())
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in toasts.toasts() {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    let text = egui::RichText::new(&toast.notice.message);
                    match toast.notice.kind {
                        NoticeKind::Notice => ui.label(text),
                        NoticeKind::Error => ui.colored_label(ui.visuals().error_fg_color, text),
                    };
                });
                ui.add_space(4.0);
            }
        });
}
