//! Build chat panel: conversation history and the prompt input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting runs the build-request transitions in `state::build` and issues
//! the single `POST /api/ask` for each dispatched request.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::build::{self, Submit};
use crate::state::chat::{ChatState, Sender};
use crate::state::files::FilesState;
use crate::util::time::{clock_label, now_ms};

fn can_send(input: &str, generating: bool) -> bool {
    !input.trim().is_empty() && !generating
}

/// Time label for a message. Empty until the component is mounted in the
/// browser, so server and client markup agree during hydration.
fn time_label(mounted: bool, timestamp_ms: f64) -> String {
    if mounted { clock_label(timestamp_ms) } else { String::new() }
}

/// Chat panel showing message history, a pending indicator, and the input row.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let files = expect_context::<RwSignal<FilesState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let mounted = RwSignal::new(false);

    // Effects only run in the browser, after hydration.
    Effect::new(move || mounted.set(true));

    Effect::new(move || {
        let state = chat.get();
        let _ = state.len();
        let _ = state.generating;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let mut text = input.get_untracked();
        let session = auth.with_untracked(AuthState::session);
        let outcome = chat
            .try_maybe_update(|c| {
                let outcome = build::submit(&mut text, session, c, now_ms());
                (outcome.changes_state(), outcome)
            })
            .unwrap_or(Submit::Ignored);

        match outcome {
            Submit::Ignored => {}
            Submit::NeedsAuth => auth.update(AuthState::open_modal),
            Submit::Dispatch(request) => {
                input.set(text);
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::ask(&request).await;
                    chat.update(|c| files.update(|f| build::apply_outcome(c, f, outcome, now_ms())));
                });
            }
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let generating = move || chat.get().generating;

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <span class="chat-panel__title">"Chat"</span>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages()
                        .iter()
                        .map(|msg| {
                            let is_user = msg.sender == Sender::User;
                            let content = msg.content.clone();
                            let timestamp = msg.timestamp;
                            view! {
                                <div class="chat-panel__row" class:chat-panel__row--user=is_user>
                                    <div class="chat-panel__bubble" class:chat-panel__bubble--user=is_user>
                                        <div class="chat-panel__text">{content}</div>
                                        <div class="chat-panel__time">{move || time_label(mounted.get(), timestamp)}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    generating()
                        .then(|| {
                            view! {
                                <div class="chat-panel__row">
                                    <div class="chat-panel__bubble chat-panel__bubble--pending">
                                        <span class="spinner"></span>
                                        <span>"Creating your app..."</span>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="💬 Describe what you want to build..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=generating
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send(&input.get(), generating())
                    title="Send"
                >
                    {move || if generating() { view! { <span class="spinner"></span> }.into_any() } else { "Send".into_any() }}
                </button>
            </div>
        </div>
    }
}
