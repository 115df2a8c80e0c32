//! User-facing notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens talk to a [`Notifier`]; the app provides `RwSignal<Notices>` as the
//! concrete sink and `NoticeBar` renders it. Failed operations go through
//! [`report_failure`] so each one logs its detail and raises exactly one
//! error notice.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::fmt::Display;

use leptos::prelude::*;

/// Maximum notices kept on screen; older ones are dropped first.
pub const MAX_NOTICES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Sink for user-visible notifications.
pub trait Notifier {
    fn notify(&self, level: NoticeLevel, message: String);

    fn success(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Success, message.into());
    }

    fn error(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Error, message.into());
    }
}

/// Log `error` against `operation` and show `message` to the user.
pub fn report_failure<N: Notifier>(notifier: &N, operation: &str, error: &impl Display, message: &str) {
    log::error!("{operation} failed: {error}");
    notifier.error(message);
}

/// Queue of notices currently shown.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Append a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Notice { id, level, message });
        if self.entries.len() > MAX_NOTICES {
            let overflow = self.entries.len() - MAX_NOTICES;
            self.entries.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

impl Notifier for RwSignal<Notices> {
    fn notify(&self, level: NoticeLevel, message: String) {
        self.update(|n| {
            n.push(level, message);
        });
    }
}
