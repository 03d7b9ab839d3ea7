//! Chat page at `/`, also framed by the embeddable widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget loader points its iframe at `/?widget=1&client=..&color=..&logo=..`
//! and draws the branded header around the frame itself. In that mode the page
//! drops its chrome, paints the tenant accent and sends `client` with every
//! message. Otherwise it renders the standalone page.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::chat_panel::ChatPanel;
use crate::state::surface::Surface;

#[component]
pub fn ChatPage() -> impl IntoView {
    let query = use_query_map();
    let surface = query.with_untracked(|q| Surface::from_params(|key| q.get(key)));
    let client = surface.client().map(ToOwned::to_owned);

    match surface.accent_style() {
        None => view! {
            <div class="chat-page">
                <h1 class="chat-page__title">"Receptionist"</h1>
                <ChatPanel/>
            </div>
        }
        .into_any(),
        Some(accent) => view! {
            <div class="chat-page chat-page--widget" style=accent>
                <ChatPanel client=client.unwrap_or_default()/>
            </div>
        }
        .into_any(),
    }
}
