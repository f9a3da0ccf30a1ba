//! Floating assistant chat widget: launcher, transcript, and input.
//!
//! Submissions are single-flight — the pending flag disables the input
//! until the outstanding call resolves, and every call resolves to either
//! the endpoint's reply or a fixed fallback message.

use leptos::prelude::*;

use crate::state::chat::{self, ChatState};
use crate::util::time;

/// Chat widget showing the transcript and an input for asking questions.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the latest message visible whenever the transcript changes.
    Effect::new(move || {
        let state = chat.get();
        let _ = (state.messages.len(), state.pending);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let mut issued = None;
        chat.update(|c| issued = c.submit(time::now_ms()));
        let Some(request) = issued else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let reply = match crate::net::api::ask_assistant(&request).await {
                    Ok(text) => text,
                    Err(err) => {
                        log::warn!("assistant request failed: {err}");
                        chat::fallback_for(&err).to_owned()
                    }
                };
                chat.update(|c| c.resolve(reply, time::now_ms()));
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let pending = move || chat.get().pending;
    let can_send = move || chat.get().can_submit();

    view! {
        <div class="chat-widget">
            <button
                class="chat-widget__launcher"
                on:click=move |_| chat.update(|c| c.toggle())
                title="Chat with KP's assistant"
            >
                {move || if chat.get().open { "✕" } else { "💬" }}
            </button>

            <Show when=move || chat.get().open>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">
                        <span class="chat-widget__title">"KP's Assistant"</span>
                        <button
                            class="chat-widget__close"
                            on:click=move |_| chat.update(|c| c.toggle())
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="chat-widget__messages" node_ref=messages_ref>
                        {move || {
                            chat.get()
                                .messages
                                .iter()
                                .map(|msg| {
                                    let label = msg.role.label();
                                    let body = msg.body.clone();
                                    let is_assistant = msg.role == crate::net::types::Role::Assistant;
                                    view! {
                                        <div
                                            class="chat-widget__message"
                                            class:chat-widget__message--assistant=is_assistant
                                        >
                                            <span class="chat-widget__sender">{label}</span>
                                            <div class="chat-widget__body">{body}</div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        {move || {
                            chat.get()
                                .pending
                                .then(|| view! { <div class="chat-widget__typing">"Typing..."</div> })
                        }}
                    </div>

                    <Show when=move || chat.get().offers_quick_questions()>
                        <div class="chat-widget__quick">
                            {chat::QUICK_QUESTIONS
                                .iter()
                                .map(|question| {
                                    view! {
                                        <button
                                            class="chat-widget__quick-button"
                                            on:click=move |_| chat.update(|c| c.quick_fill(question))
                                        >
                                            {*question}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </Show>

                    <div class="chat-widget__input-row">
                        <input
                            class="chat-widget__input"
                            type="text"
                            placeholder="Ask about experience, skills, projects..."
                            prop:value=move || chat.get().input
                            disabled=pending
                            on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn--primary chat-widget__send"
                            on:click=on_click
                            disabled=move || !can_send()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
