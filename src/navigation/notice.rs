//! User-visible confirmation and error notices
//!
//! Fire-and-forget: the sender never waits and nothing in the core depends on
//! whether a notice was shown.

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sending half of the notice channel, cheap to clone into screens
#[derive(Clone, Debug)]
pub struct Notifier {
    tx: Sender<Notice>,
}

impl Notifier {
    pub fn channel() -> (Self, Receiver<Notice>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }

    pub fn notify(&self, notice: Notice) {
        info!("[NOTICE] {:?}: {}", notice.level, notice.message);
        if self.tx.send(notice).is_err() {
            warn!("[NOTICE] No receiver, notice dropped");
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(Notice::info(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notice::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_arrive_in_order() {
        let (notifier, rx) = Notifier::channel();
        notifier.info("saved");
        notifier.error("too big");

        assert_eq!(rx.try_recv().unwrap(), Notice::info("saved"));
        assert_eq!(rx.try_recv().unwrap().level, NoticeLevel::Error);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_notify_without_receiver_does_not_panic() {
        let (notifier, rx) = Notifier::channel();
        drop(rx);
        notifier.info("nobody listening");
    }
}
