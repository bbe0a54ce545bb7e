//! Floating assistant widget: toggle button plus conversation panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one [`Conversation`] per mount. User input and suggestion chips go
//! through the conversation's transition methods; accepted turns are posted
//! to the assistant endpoint on a local task and their outcome is fed back
//! with [`Conversation::complete`].
//!
//! Side effects kept here rather than in state:
//! - scroll the transcript to its end when messages or pending change
//! - focus the input when the panel opens
//! - hold a window Escape listener only while the panel is open
//! - move the cosmetic glow with the pointer over the input area

use leptos::prelude::*;

use crate::components::chat_bubble::ChatBubble;
use crate::components::typing_indicator::TypingIndicator;
use crate::config::WidgetConfig;
use crate::state::conversation::{Conversation, Message, OutboundTurn, SUGGESTED_QUESTIONS, SubmitRejected};
use crate::util::clock;
use crate::util::glow::GlowPosition;
use crate::util::key_listener::CancelKeySubscription;
use crate::util::keys::is_submit_key;

/// Floating chat toggle and assistant panel.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let config = StoredValue::new(use_context::<WidgetConfig>().unwrap_or_default());
    let conversation = RwSignal::new(Conversation::new());
    let draft = RwSignal::new(String::new());
    let glow = RwSignal::new(GlowPosition::default());
    let cancel_keys = StoredValue::new(CancelKeySubscription::default());

    let messages_end_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let input_container_ref = NodeRef::<leptos::html::Div>::new();

    let is_open = Memo::new(move |_| conversation.with(Conversation::is_open));
    let is_pending = Memo::new(move |_| conversation.with(Conversation::is_pending));
    let message_count = Memo::new(move |_| conversation.with(|c| c.transcript().len()));

    Effect::new(move || {
        let _ = message_count.get();
        let _ = is_pending.get();
        let _ = is_open.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(end) = messages_end_ref.get() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                end.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    Effect::new(move || {
        if !is_open.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            if let Some(input_el) = input_ref.get() {
                let _ = input_el.focus();
            }
        }
    });

    Effect::new(move || {
        if is_open.get() {
            cancel_keys.update_value(|keys| {
                keys.acquire(move || {
                    conversation.update(|c| {
                        c.close();
                    });
                });
            });
        } else {
            cancel_keys.update_value(|keys| keys.release());
        }
    });

    on_cleanup(move || cancel_keys.update_value(|keys| keys.release()));

    let submit_draft = move || {
        let text = draft.get_untracked();
        begin_turn(conversation, draft, config, |c, stamp| c.submit(&text, stamp));
    };

    let choose_suggestion = move |question: &'static str| {
        begin_turn(conversation, draft, config, |c, stamp| c.select_suggestion(question, stamp));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            submit_draft();
        }
    };

    let on_pointer_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(container) = input_container_ref.get() else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            glow.set(GlowPosition::relative_to(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                rect.left(),
                rect.top(),
            ));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let can_send = move || {
        let text = draft.get();
        conversation.with(|c| c.can_send(&text))
    };

    let owner = config.with_value(|c| c.owner.clone());

    view! {
        <div class="chat-widget">
            <button
                class="chat-widget__toggle"
                class:chat-widget__toggle--open=move || is_open.get()
                aria-label="Toggle chat"
                on:click=move |_| {
                    conversation.update(|c| {
                        c.toggle_visibility();
                    });
                }
            >
                <span class="chat-widget__toggle-icon" aria-hidden="true">
                    {move || if is_open.get() { "\u{2715}" } else { "\u{1F4AC}" }}
                </span>
                {move || (!is_open.get()).then(|| view! { <span class="chat-widget__attention"></span> })}
            </button>

            <Show when=move || is_open.get()>
                <div class="chat-widget__panel" role="dialog" aria-label="AI assistant">
                    <div class="chat-widget__header">
                        <div class="chat-widget__header-icon" aria-hidden="true">"\u{2728}"</div>
                        <div class="chat-widget__header-text">
                            <h3 class="chat-widget__title">"AI Assistant"</h3>
                            <p class="chat-widget__subtitle">{format!("Ask me anything about {owner}")}</p>
                        </div>
                        <span class="chat-widget__status-dot" aria-label="Online"></span>
                    </div>

                    <div class="chat-widget__messages">
                        {move || {
                            (message_count.get() == 0)
                                .then(|| {
                                    view! {
                                        <div class="chat-widget__welcome">
                                            <div class="chat-widget__welcome-icon" aria-hidden="true">"\u{2728}"</div>
                                            <h4 class="chat-widget__welcome-title">"Welcome! How can I help?"</h4>
                                            <p class="chat-widget__welcome-hint">
                                                "Ask me about services, pricing, availability, or anything else."
                                            </p>
                                        </div>
                                    }
                                })
                        }}

                        <For
                            each=move || conversation.with(|c| c.transcript().to_vec())
                            key=|message: &Message| message.id
                            children=move |message: Message| {
                                view! {
                                    <ChatBubble text=message.text sender=message.sender timestamp=message.timestamp/>
                                }
                            }
                        />

                        <Show when=move || is_pending.get()>
                            <div class="chat-widget__busy">
                                <div class="chat-widget__busy-avatar" aria-hidden="true">"\u{2728}"</div>
                                <TypingIndicator/>
                            </div>
                        </Show>

                        {move || {
                            conversation
                                .with(|c| c.last_error().map(str::to_owned))
                                .map(|notice| {
                                    view! {
                                        <div class="chat-widget__error" role="alert">
                                            <span class="chat-widget__error-icon" aria-hidden="true">"!"</span>
                                            <p class="chat-widget__error-text">{notice}</p>
                                        </div>
                                    }
                                })
                        }}

                        <div class="chat-widget__messages-end" node_ref=messages_end_ref></div>
                    </div>

                    <Show when=move || conversation.with(Conversation::suggestions_visible)>
                        <div class="chat-widget__suggestions">
                            {SUGGESTED_QUESTIONS
                                .into_iter()
                                .map(|question| {
                                    view! {
                                        <button
                                            class="chat-widget__suggestion"
                                            disabled=move || is_pending.get()
                                            on:click=move |_| choose_suggestion(question)
                                        >
                                            {question}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>

                    <div class="chat-widget__input-area" node_ref=input_container_ref on:mousemove=on_pointer_move>
                        <div class="chat-widget__glow" aria-hidden="true" style=move || glow.get().style()></div>
                        <div class="chat-widget__input-row">
                            <input
                                class="chat-widget__input"
                                type="text"
                                placeholder="Type your message..."
                                aria-label="Chat message input"
                                node_ref=input_ref
                                disabled=move || is_pending.get()
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                                on:keydown=on_keydown
                            />
                            <button
                                class="chat-widget__send"
                                aria-label="Send message"
                                disabled=move || !can_send()
                                on:click=move |_| submit_draft()
                            >
                                "\u{27A4}"
                            </button>
                        </div>
                        <p class="chat-widget__hint">
                            "Press " <kbd>"Enter"</kbd> " to send, " <kbd>"Esc"</kbd> " to close"
                        </p>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Run one submission attempt against the conversation and, when accepted,
/// clear the draft and dispatch the request.
fn begin_turn(
    conversation: RwSignal<Conversation>,
    draft: RwSignal<String>,
    config: StoredValue<WidgetConfig>,
    attempt: impl FnOnce(&mut Conversation, String) -> Result<OutboundTurn, SubmitRejected>,
) {
    let stamp = clock::now_label();
    match conversation.try_update(|c| attempt(c, stamp)) {
        Some(Ok(turn)) => {
            draft.set(String::new());
            dispatch_turn(conversation, config, turn);
        }
        Some(Err(SubmitRejected::Empty)) | None => {}
        Some(Err(rejected)) => {
            leptos::logging::warn!("assistant submit rejected: {rejected}");
        }
    }
}

/// Post the turn's prompt and apply the outcome. Closing the panel does not
/// cancel the request.
fn dispatch_turn(conversation: RwSignal<Conversation>, config: StoredValue<WidgetConfig>, turn: OutboundTurn) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::assistant::send_prompt;
        use crate::state::conversation::TurnResolution;

        let (endpoint, timeout) = config.with_value(|c| (c.endpoint.clone(), c.timeout));
        leptos::task::spawn_local(async move {
            let outcome = send_prompt(&endpoint, &turn.prompt, timeout).await;
            match &outcome {
                Err(e) if e.is_timeout() => leptos::logging::warn!("assistant request timed out: {e}"),
                Err(e) => leptos::logging::error!("assistant request failed: {e}"),
                Ok(_) => {}
            }

            let stamp = clock::now_label();
            let resolution = conversation.try_update(|c| c.complete(turn.turn, outcome, stamp));
            if resolution == Some(TurnResolution::Stale) {
                leptos::logging::warn!("ignored stale assistant completion for {:?}", turn.turn);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (conversation, config, turn);
    }
}
