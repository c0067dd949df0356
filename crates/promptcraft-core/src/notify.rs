//! Transient user-visible notices ("toasts").
//!
//! The generator never talks to a UI directly. Operations that surface a
//! message take a `&mut dyn Notifier`, so a terminal front end can pass its
//! [`NoticeBoard`] and tests can pass a plain `Vec<Notice>`.

use std::time::{Duration, Instant};

pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, message: &str);
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.push(Notice {
            kind,
            message: message.to_string(),
        });
    }
}

/// Visible notices, each dropped once its time-to-live has passed.
#[derive(Debug)]
pub struct NoticeBoard {
    ttl: Duration,
    entries: Vec<(Notice, Instant)>,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Vec::new(),
        }
    }

    pub fn notify_at(&mut self, kind: NoticeKind, message: &str, at: Instant) {
        self.entries.push((
            Notice {
                kind,
                message: message.to_string(),
            },
            at,
        ));
    }

    /// Drop expired notices. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries
            .retain(|(_, shown_at)| now.saturating_duration_since(*shown_at) < ttl);
        self.entries.len() != before
    }

    /// Oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter().map(|(notice, _)| notice)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl Notifier for NoticeBoard {
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => tracing::info!(notice = message, "notice shown"),
            NoticeKind::Error => tracing::warn!(notice = message, "notice shown"),
        }
        self.notify_at(kind, message, Instant::now());
    }
}
