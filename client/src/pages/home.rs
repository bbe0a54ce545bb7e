//! Landing page hosting the assistant widget.
//!
//! The portfolio sections themselves are static files served by the host;
//! this page only renders the hero and mounts the floating widget.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;

#[component]
pub fn HomePage() -> impl IntoView {
    let owner = use_context::<WidgetConfig>().unwrap_or_default().owner;

    view! {
        <main class="portfolio">
            <header class="portfolio__hero">
                <h1 class="portfolio__name">{owner}</h1>
                <p class="portfolio__tagline">"Portfolio"</p>
            </header>
        </main>
        <ChatWidget/>
    }
}
