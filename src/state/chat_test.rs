use futures::executor::block_on;

use super::*;
use crate::net::api;
use crate::net::test_support::{Method, MockClient};
use crate::state::test_support::RecordingNotifier;

fn counterpart(id: Id, name: &str) -> Conversation {
    Conversation { id, full_name: Some(name.to_owned()), role: Some("PHARMACIST".to_owned()) }
}

fn message(id: Id, sender_id: Id, receiver_id: Id, text: &str) -> ChatMessage {
    ChatMessage {
        id,
        sender_id,
        receiver_id,
        message: text.to_owned(),
        created_at: "2024-05-01T09:30:00".to_owned(),
    }
}

fn history_json(counterpart_id: Id) -> serde_json::Value {
    serde_json::json!([
        {"id": 1, "senderId": 1, "receiverId": counterpart_id, "message": "hello", "createdAt": "2024-05-01T09:30:00"},
        {"id": 2, "senderId": counterpart_id, "receiverId": 1, "message": "hi there", "createdAt": "2024-05-01T09:31:00"}
    ])
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_empty() {
    let state = ChatState::default();
    assert!(state.conversations.is_empty());
    assert!(state.messages.is_empty());
    assert!(state.selected.is_none());
    assert!(state.draft.is_empty());
}

// =============================================================
// Conversations
// =============================================================

#[test]
fn load_conversations_success_sets_list() {
    let client = MockClient::new();
    client.ok(Method::Get, api::CONVERSATIONS_PATH, serde_json::json!([{"id": 3, "fullName": "Dr. Lee", "role": "PHARMACIST"}]));
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::default();

    state.begin_load();
    assert!(state.loading);
    state.apply_conversations(block_on(api::fetch_conversations(&client)), &notifier);

    assert!(!state.loading);
    assert_eq!(state.conversations, vec![counterpart(3, "Dr. Lee")]);
    assert_eq!(notifier.total(), 0);
}

#[test]
fn load_conversations_failure_resets_and_notifies_once() {
    let client = MockClient::new();
    client.fail(Method::Get, api::CONVERSATIONS_PATH);
    let notifier = RecordingNotifier::new();
    let mut state = ChatState { conversations: vec![counterpart(1, "Old")], ..ChatState::default() };

    state.begin_load();
    state.apply_conversations(block_on(api::fetch_conversations(&client)), &notifier);

    assert!(state.conversations.is_empty());
    assert!(!state.loading);
    assert_eq!(notifier.errors(), vec![LOAD_CONVERSATIONS_FAILED.to_owned()]);
    assert_eq!(notifier.total(), 1);
}

// =============================================================
// History
// =============================================================

#[test]
fn select_then_history_loads_messages() {
    let client = MockClient::new();
    client.ok(Method::Get, "/chat/conversation/3", history_json(3));
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::default();

    let req = state.select(counterpart(3, "Dr. Lee"));
    assert_eq!(req.counterpart_id, 3);
    let applied = state.apply_history(req, block_on(api::fetch_messages(&client, req.counterpart_id)), &notifier);

    assert!(applied);
    assert!(state.is_selected(3));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].message, "hi there");
}

#[test]
fn history_failure_clears_messages_and_notifies_once() {
    let notifier = RecordingNotifier::new();
    let mut state = ChatState { messages: vec![message(1, 1, 3, "stale")], ..ChatState::default() };

    let req = state.select(counterpart(3, "Dr. Lee"));
    state.apply_history(req, Err(ApiError::Status(500)), &notifier);

    assert!(state.messages.is_empty());
    assert_eq!(notifier.errors(), vec![LOAD_MESSAGES_FAILED.to_owned()]);
}

#[test]
fn stale_history_response_is_discarded() {
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::default();

    let first = state.select(counterpart(3, "Dr. Lee"));
    let second = state.select(counterpart(4, "Dr. Kim"));

    assert!(state.apply_history(second, Ok(vec![message(9, 4, 1, "from kim")]), &notifier));
    // The slower response for the first counterpart arrives last.
    assert!(!state.apply_history(first, Ok(vec![message(8, 3, 1, "from lee")]), &notifier));

    assert_eq!(state.messages, vec![message(9, 4, 1, "from kim")]);
    assert!(state.is_selected(4));
}

#[test]
fn switching_counterpart_clears_messages_before_history_arrives() {
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::default();

    let first = state.select(counterpart(3, "Dr. Lee"));
    state.apply_history(first, Ok(vec![message(8, 3, 1, "from lee")]), &notifier);
    let _second = state.select(counterpart(4, "Dr. Kim"));

    assert!(state.is_selected(4));
    assert!(state.messages.is_empty());
}

#[test]
fn reselecting_or_refreshing_keeps_messages_until_reply() {
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::default();

    let first = state.select(counterpart(3, "Dr. Lee"));
    state.apply_history(first, Ok(vec![message(8, 3, 1, "from lee")]), &notifier);
    state.select(counterpart(3, "Dr. Lee"));
    assert_eq!(state.messages.len(), 1);
    state.refresh_history();
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn stale_history_failure_does_not_notify() {
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::default();

    let first = state.select(counterpart(3, "Dr. Lee"));
    let _second = state.select(counterpart(4, "Dr. Kim"));
    state.apply_history(first, Err(ApiError::Status(502)), &notifier);

    assert_eq!(notifier.total(), 0);
}

// =============================================================
// Pharmacist lookup
// =============================================================

#[test]
fn pharmacist_lookup_selects_and_requests_history() {
    let client = MockClient::new();
    client.ok(Method::Get, api::PHARMACIST_PATH, serde_json::json!({"id": 11, "fullName": "Dr. Ruiz", "role": "PHARMACIST"}));
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::default();

    let req = state.apply_pharmacist(block_on(api::find_pharmacist(&client)), &notifier);

    assert_eq!(req.map(|r| r.counterpart_id), Some(11));
    assert!(state.is_selected(11));
    assert_eq!(notifier.successes(), vec![PHARMACIST_CONNECTED.to_owned()]);
}

#[test]
fn pharmacist_lookup_failure_keeps_selection() {
    let client = MockClient::new();
    client.fail(Method::Get, api::PHARMACIST_PATH);
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::default();
    state.select(counterpart(3, "Dr. Lee"));

    let req = state.apply_pharmacist(block_on(api::find_pharmacist(&client)), &notifier);

    assert!(req.is_none());
    assert!(state.is_selected(3));
    assert_eq!(notifier.errors(), vec![NO_PHARMACIST.to_owned()]);
}

#[test]
fn pharmacist_lookup_offered_only_to_customers_without_conversations() {
    let mut state = ChatState::default();
    assert!(state.offers_pharmacist_lookup(true));
    assert!(!state.offers_pharmacist_lookup(false));
    state.conversations.push(counterpart(3, "Dr. Lee"));
    assert!(!state.offers_pharmacist_lookup(true));
}

// =============================================================
// Sending
// =============================================================

#[test]
fn outgoing_requires_text_and_counterpart() {
    let mut state = ChatState { draft: "   ".to_owned(), ..ChatState::default() };
    assert!(state.outgoing().is_none());

    state.draft = "Is this in stock?".to_owned();
    assert!(state.outgoing().is_none());

    state.select(counterpart(3, "Dr. Lee"));
    assert_eq!(
        state.outgoing(),
        Some(OutgoingMessage { receiver_id: 3, message: "Is this in stock?".to_owned() })
    );
}

#[test]
fn send_success_clears_draft_and_refetches_history() {
    let client = MockClient::new();
    client.ok(Method::Post, api::SEND_MESSAGE_PATH, serde_json::json!({"id": 5}));
    client.ok(Method::Get, "/chat/conversation/3", history_json(3));
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::default();
    state.select(counterpart(3, "Dr. Lee"));
    state.draft = "hello".to_owned();

    let outgoing = state.outgoing().unwrap();
    let refetch = state.apply_sent(block_on(api::send_message(&client, &outgoing)), &notifier).unwrap();
    assert!(state.draft.is_empty());
    // No local append before the refetch lands.
    assert!(state.messages.is_empty());

    state.apply_history(refetch, block_on(api::fetch_messages(&client, refetch.counterpart_id)), &notifier);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(client.count(Method::Get, "/chat/conversation/3"), 1);
    assert_eq!(notifier.total(), 0);
}

#[test]
fn send_failure_keeps_draft_and_skips_refetch() {
    let client = MockClient::new();
    client.fail(Method::Post, api::SEND_MESSAGE_PATH);
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::default();
    state.select(counterpart(3, "Dr. Lee"));
    state.draft = "hello".to_owned();

    let outgoing = state.outgoing().unwrap();
    let refetch = state.apply_sent(block_on(api::send_message(&client, &outgoing)), &notifier);

    assert!(refetch.is_none());
    assert_eq!(state.draft, "hello");
    assert_eq!(notifier.errors(), vec![SEND_FAILED.to_owned()]);
}

// =============================================================
// Ownership
// =============================================================

#[test]
fn own_message_matches_sender() {
    let msg = message(1, 7, 3, "hi");
    assert!(is_own_message(&msg, Some(7)));
    assert!(!is_own_message(&msg, Some(3)));
    assert!(!is_own_message(&msg, None));
}
