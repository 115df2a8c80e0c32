//! Chat page: conversation list, message history, and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the conversation list on mount and the history of whichever
//! counterpart is selected. Customers without conversations can ask the
//! backend for an available pharmacist.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::BrowserClient;
use crate::net::types::Conversation;
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, HistoryRequest, is_own_message};
use crate::state::notify::Notices;
use crate::util::format::{avatar_initial, time_of_day};
use crate::util::task::spawn_in_browser;

fn load_conversations(client: StoredValue<BrowserClient>, chat: RwSignal<ChatState>, notices: RwSignal<Notices>) {
    chat.update(ChatState::begin_load);
    spawn_in_browser(async move {
        let result = api::fetch_conversations(&client.get_value()).await;
        chat.update(|s| s.apply_conversations(result, &notices));
    });
}

fn load_history(
    client: StoredValue<BrowserClient>,
    chat: RwSignal<ChatState>,
    notices: RwSignal<Notices>,
    request: HistoryRequest,
) {
    spawn_in_browser(async move {
        let result = api::fetch_messages(&client.get_value(), request.counterpart_id).await;
        chat.update(|s| {
            s.apply_history(request, result, &notices);
        });
    });
}

fn find_pharmacist(client: StoredValue<BrowserClient>, chat: RwSignal<ChatState>, notices: RwSignal<Notices>) {
    spawn_in_browser(async move {
        let result = api::find_pharmacist(&client.get_value()).await;
        if let Some(request) = chat.try_update(|s| s.apply_pharmacist(result, &notices)).flatten() {
            load_history(client, chat, notices, request);
        }
    });
}

/// Chat page.
#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<Notices>>();
    let client = StoredValue::new(expect_context::<BrowserClient>());
    let chat = RwSignal::new(ChatState::default());

    load_conversations(client, chat, notices);

    let on_select = Callback::new(move |conv: Conversation| {
        if let Some(request) = chat.try_update(|s| s.select(conv)) {
            load_history(client, chat, notices, request);
        }
    });

    let on_find_pharmacist = move |_| find_pharmacist(client, chat, notices);

    let do_send = move || {
        let Some(outgoing) = chat.with_untracked(ChatState::outgoing) else {
            return;
        };
        spawn_in_browser(async move {
            let result = api::send_message(&client.get_value(), &outgoing).await;
            if let Some(request) = chat.try_update(|s| s.apply_sent(result, &notices)).flatten() {
                load_history(client, chat, notices, request);
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let offers_lookup = move || {
        let is_customer = auth.with(AuthState::is_customer);
        chat.with(|s| s.offers_pharmacist_lookup(is_customer))
    };

    view! {
        <Show
            when=move || !chat.with(|s| s.loading)
            fallback=|| view! { <div class="page-spinner" aria-busy="true"></div> }
        >
            <div class="chat-page">
                <header class="page-header">
                    <h1>"Chat"</h1>
                    <Show when=offers_lookup>
                        <button class="btn btn--primary" on:click=on_find_pharmacist>
                            "Connect with Pharmacist"
                        </button>
                    </Show>
                </header>

                <div class="chat-page__body">
                    <aside class="chat-page__list">
                        <h2>"Conversations"</h2>
                        <Show
                            when=move || chat.with(|s| !s.conversations.is_empty())
                            fallback=move || {
                                view! {
                                    <div class="chat-page__empty">
                                        <p>"No conversations yet"</p>
                                        <Show when=move || auth.with(AuthState::is_customer)>
                                            <button class="btn btn--small" on:click=on_find_pharmacist>
                                                "Start Chat with Pharmacist"
                                            </button>
                                        </Show>
                                    </div>
                                }
                            }
                        >
                            <For
                                each=move || chat.with(|s| s.conversations.clone())
                                key=|conv| conv.id
                                children=move |conv| view! { <ConversationRow conv=conv chat=chat on_select=on_select/> }
                            />
                        </Show>
                    </aside>

                    <section class="chat-page__thread">
                        <Show
                            when=move || chat.with(|s| s.selected.is_some())
                            fallback=move || {
                                view! {
                                    <div class="chat-page__placeholder">
                                        <p>"Select a conversation to start chatting"</p>
                                        <Show when=offers_lookup>
                                            <button class="btn btn--primary" on:click=on_find_pharmacist>
                                                "Connect with Pharmacist"
                                            </button>
                                        </Show>
                                    </div>
                                }
                            }
                        >
                            <ThreadHeader chat=chat/>
                            <MessageList chat=chat auth=auth/>
                            <div class="chat-page__composer">
                                <input
                                    class="chat-page__input"
                                    type="text"
                                    placeholder="Type a message..."
                                    prop:value=move || chat.with(|s| s.draft.clone())
                                    on:input=move |ev| chat.update(|s| s.draft = event_target_value(&ev))
                                    on:keydown=on_keydown
                                />
                                <button class="btn btn--primary" on:click=move |_| do_send()>
                                    "Send"
                                </button>
                            </div>
                        </Show>
                    </section>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ConversationRow(conv: Conversation, chat: RwSignal<ChatState>, on_select: Callback<Conversation>) -> impl IntoView {
    let id = conv.id;
    let initial = avatar_initial(conv.full_name.as_deref());
    let name = conv.full_name.clone().unwrap_or_default();
    let role = conv.role.clone().unwrap_or_default();

    view! {
        <div
            class="conversation-row"
            class:conversation-row--active=move || chat.with(|s| s.is_selected(id))
            on:click=move |_| on_select.run(conv.clone())
        >
            <span class="avatar">{initial}</span>
            <div class="conversation-row__text">
                <p class="conversation-row__name">{name}</p>
                <p class="conversation-row__role">{role}</p>
            </div>
        </div>
    }
}

#[component]
fn ThreadHeader(chat: RwSignal<ChatState>) -> impl IntoView {
    let selected = move || chat.with(|s| s.selected.clone());

    view! {
        <div class="chat-page__thread-header">
            <span class="avatar avatar--large">
                {move || avatar_initial(selected().and_then(|c| c.full_name).as_deref())}
            </span>
            <div>
                <h2>{move || selected().and_then(|c| c.full_name).unwrap_or_default()}</h2>
                <p class="chat-page__role">{move || selected().and_then(|c| c.role).unwrap_or_default()}</p>
            </div>
        </div>
    }
}

#[component]
fn MessageList(chat: RwSignal<ChatState>, auth: RwSignal<AuthState>) -> impl IntoView {
    view! {
        <div class="chat-page__messages">
            {move || {
                let me = auth.with(AuthState::user_id);
                let messages = chat.with(|s| s.messages.clone());
                if messages.is_empty() {
                    return view! {
                        <div class="chat-page__empty">"No messages yet. Start the conversation!"</div>
                    }
                        .into_any();
                }
                messages
                    .into_iter()
                    .map(|msg| {
                        let own = is_own_message(&msg, me);
                        let time = time_of_day(&msg.created_at);
                        view! {
                            <div class="message" class:message--own=own>
                                <div class="message__bubble">
                                    <p>{msg.message}</p>
                                    <p class="message__time">{time}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
