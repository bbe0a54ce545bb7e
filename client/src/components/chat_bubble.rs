//! Single transcript entry.

#[cfg(test)]
#[path = "chat_bubble_test.rs"]
mod chat_bubble_test;

use leptos::prelude::*;

use crate::state::conversation::Sender;

/// Avatar glyph shown next to a bubble.
#[must_use]
pub fn avatar_glyph(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "\u{1F464}",
        Sender::Assistant => "\u{1F916}",
    }
}

/// Accessible label for the bubble's author.
#[must_use]
pub fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "You",
        Sender::Assistant => "Assistant",
    }
}

/// Stateless rendering of one message: user bubbles align right, assistant
/// bubbles align left. The timestamp line is omitted when empty.
#[component]
pub fn ChatBubble(text: String, sender: Sender, #[prop(optional, into)] timestamp: String) -> impl IntoView {
    let is_user = sender == Sender::User;
    let is_assistant = !is_user;

    view! {
        <div
            class="chat-bubble"
            class:chat-bubble--user=is_user
            class:chat-bubble--assistant=is_assistant
            aria-label=sender_label(sender)
        >
            <div class="chat-bubble__avatar" aria-hidden="true">
                {avatar_glyph(sender)}
            </div>
            <div class="chat-bubble__body">
                <p class="chat-bubble__text">{text}</p>
                {(!timestamp.is_empty())
                    .then(|| view! { <span class="chat-bubble__time">{timestamp}</span> })}
            </div>
        </div>
    }
}
