//! "Assistant is composing" affordance.
//!
//! Three dots pulse on a CSS animation loop with staggered start offsets; the
//! component holds no timers and reads no state.

#[cfg(test)]
#[path = "typing_indicator_test.rs"]
mod typing_indicator_test;

use leptos::prelude::*;

pub const DOT_COUNT: usize = 3;
pub const DOT_STAGGER_MS: u32 = 200;

/// Animation start offset for the dot at `index`.
#[must_use]
pub fn dot_delay_ms(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(DOT_STAGGER_MS))
}

#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="typing-indicator" role="status" aria-label="Assistant is typing">
            {(0..DOT_COUNT)
                .map(|index| {
                    view! {
                        <span
                            class="typing-indicator__dot"
                            style:animation-delay=format!("{}ms", dot_delay_ms(index))
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}
