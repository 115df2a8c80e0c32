//! Customer/pharmacist conversation screen state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat page issues REST calls through `net::api` and feeds each result
//! back into one of the `apply_*` methods here. Nothing is appended locally:
//! after a send the history is fetched again.
//!
//! RESPONSE ORDERING
//! =================
//! Every history fetch is tagged with a [`HistoryRequest`] sequence number.
//! Only the response to the most recent request is applied, so a quick
//! switch between counterparts never shows the previous counterpart's
//! messages under the new header.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::http::ApiError;
use crate::net::types::{ChatMessage, Conversation, Id, OutgoingMessage};
use crate::state::notify::{Notifier, report_failure};

pub const LOAD_CONVERSATIONS_FAILED: &str = "Failed to load conversations";
pub const LOAD_MESSAGES_FAILED: &str = "Failed to load messages";
pub const SEND_FAILED: &str = "Failed to send message";
pub const NO_PHARMACIST: &str = "No pharmacist available at the moment";
pub const PHARMACIST_CONNECTED: &str = "Connected to pharmacist/admin";

/// Ticket for one message-history fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryRequest {
    pub counterpart_id: Id,
    pub seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub conversations: Vec<Conversation>,
    pub loading: bool,
    pub selected: Option<Conversation>,
    pub messages: Vec<ChatMessage>,
    /// Composer text.
    pub draft: String,
    history_seq: u64,
}

impl ChatState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_conversations<N: Notifier>(&mut self, result: Result<Vec<Conversation>, ApiError>, notifier: &N) {
        self.loading = false;
        match result {
            Ok(list) => self.conversations = list,
            Err(e) => {
                report_failure(notifier, "load conversations", &e, LOAD_CONVERSATIONS_FAILED);
                self.conversations.clear();
            }
        }
    }

    /// Switch to `counterpart` and return the history fetch to issue.
    ///
    /// Messages of a different previous counterpart are cleared at once.
    pub fn select(&mut self, counterpart: Conversation) -> HistoryRequest {
        let counterpart_id = counterpart.id;
        if !self.is_selected(counterpart_id) {
            self.messages.clear();
        }
        self.selected = Some(counterpart);
        self.next_history_request(counterpart_id)
    }

    /// Re-fetch ticket for the current counterpart, if any.
    pub fn refresh_history(&mut self) -> Option<HistoryRequest> {
        let id = self.selected.as_ref()?.id;
        Some(self.next_history_request(id))
    }

    fn next_history_request(&mut self, counterpart_id: Id) -> HistoryRequest {
        self.history_seq += 1;
        HistoryRequest { counterpart_id, seq: self.history_seq }
    }

    /// Apply a history response. Returns `false` when the response was stale
    /// and discarded.
    pub fn apply_history<N: Notifier>(
        &mut self,
        request: HistoryRequest,
        result: Result<Vec<ChatMessage>, ApiError>,
        notifier: &N,
    ) -> bool {
        if request.seq != self.history_seq {
            log::debug!(
                "discarding stale history for {} (seq {} < {})",
                request.counterpart_id,
                request.seq,
                self.history_seq
            );
            return false;
        }
        match result {
            Ok(messages) => self.messages = messages,
            Err(e) => {
                report_failure(notifier, "load messages", &e, LOAD_MESSAGES_FAILED);
                self.messages.clear();
            }
        }
        true
    }

    /// Apply the pharmacist lookup; on success the located user becomes the
    /// counterpart and its history fetch is returned.
    pub fn apply_pharmacist<N: Notifier>(
        &mut self,
        result: Result<Conversation, ApiError>,
        notifier: &N,
    ) -> Option<HistoryRequest> {
        match result {
            Ok(pharmacist) => {
                notifier.success(PHARMACIST_CONNECTED);
                Some(self.select(pharmacist))
            }
            Err(e) => {
                report_failure(notifier, "find pharmacist", &e, NO_PHARMACIST);
                None
            }
        }
    }

    /// Message to post, or `None` when the composer is blank or no
    /// counterpart is selected.
    pub fn outgoing(&self) -> Option<OutgoingMessage> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let receiver_id = self.selected.as_ref()?.id;
        Some(OutgoingMessage { receiver_id, message: self.draft.clone() })
    }

    /// Apply a send result; on success the composer is cleared and the
    /// history re-fetch is returned.
    pub fn apply_sent<N: Notifier>(&mut self, result: Result<(), ApiError>, notifier: &N) -> Option<HistoryRequest> {
        match result {
            Ok(()) => {
                self.draft.clear();
                self.refresh_history()
            }
            Err(e) => {
                report_failure(notifier, "send message", &e, SEND_FAILED);
                None
            }
        }
    }

    pub fn is_selected(&self, id: Id) -> bool {
        self.selected.as_ref().is_some_and(|c| c.id == id)
    }

    /// Whether to offer the "Connect with Pharmacist" affordance.
    pub fn offers_pharmacist_lookup(&self, is_customer: bool) -> bool {
        is_customer && self.conversations.is_empty()
    }
}

/// `true` when `message` was sent by `user_id` and should align right.
pub fn is_own_message(message: &ChatMessage, user_id: Option<Id>) -> bool {
    user_id == Some(message.sender_id)
}
