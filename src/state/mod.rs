pub mod library;
pub mod tabs;
pub mod toast;

pub use library::AppLibrary;
pub use tabs::SettingsTab;
pub use toast::{Notice, NoticeKind, ToastManager};
