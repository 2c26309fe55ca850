// Toast notifications posted by settings pages

use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Notice,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Notice,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// Timed queue of toasts fed through a channel.
pub struct ToastManager {
    toasts: Vec<Toast>,
    timeout: Duration,
    sender: Sender<Notice>,
    receiver: Receiver<Notice>,
}

impl ToastManager {
    pub fn new(timeout: Duration) -> Self {
        let (sender, receiver) = channel();
        Self {
            toasts: Vec::new(),
            timeout,
            sender,
            receiver,
        }
    }

    /// Handle pages use to post notices.
    pub fn sender(&self) -> Sender<Notice> {
        self.sender.clone()
    }

    pub fn show(&mut self, notice: Notice) {
        self.show_at(notice, Instant::now());
    }

    fn show_at(&mut self, notice: Notice, now: Instant) {
        match notice.kind {
            NoticeKind::Notice => tracing::info!(message = %notice.message, "notice"),
            NoticeKind::Error => tracing::warn!(message = %notice.message, "error notice"),
        }
        self.toasts.push(Toast {
            notice,
            shown_at: now,
        });
    }

    /// Pull posted notices and drop expired toasts.
    pub fn update(&mut self, now: Instant) {
        while let Ok(notice) = self.receiver.try_recv() {
            self.show_at(notice, now);
        }
        let timeout = self.timeout;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < timeout);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posted_notices_are_shown() {
        let mut toasts = ToastManager::new(Duration::from_secs(5));
        let sender = toasts.sender();
        sender.send(Notice::notice("Settings reset to default")).unwrap();
        sender.send(Notice::error("save failed")).unwrap();

        toasts.update(Instant::now());
        let shown: Vec<_> = toasts.toasts().iter().map(|t| t.notice.clone()).collect();
        assert_eq!(
            shown,
            vec![Notice::notice("Settings reset to default"), Notice::error("save failed")]
        );
    }

    #[test]
    fn test_toasts_expire() {
        let mut toasts = ToastManager::new(Duration::from_secs(5));
        let start = Instant::now();
        toasts.show_at(Notice::notice("hello"), start);

        toasts.update(start + Duration::from_secs(4));
        assert_eq!(toasts.toasts().len(), 1);

        toasts.update(start + Duration::from_secs(5));
        assert!(toasts.is_empty());
    }
}
