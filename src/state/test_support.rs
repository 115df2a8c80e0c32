//! Recording [`Notifier`] for flow tests.

use std::cell::RefCell;

use super::notify::{NoticeLevel, Notices, Notifier};

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Notices>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .borrow()
            .entries
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NoticeLevel::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(NoticeLevel::Success)
    }

    pub fn total(&self) -> usize {
        self.notices.borrow().entries.len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: String) {
        self.notices.borrow_mut().push(level, message);
    }
}
