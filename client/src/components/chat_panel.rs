//! Chat panel displaying the transcript and sending new messages.

use leptos::prelude::*;
use protocol::ChatRequest;

use crate::net::api::send_chat;
use crate::state::chat::ChatState;

/// Chat panel showing the transcript and an input for sending new messages.
///
/// `client` is attached to every outbound request when present.
#[component]
pub fn ChatPanel(#[prop(optional)] client: Option<String>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let client = StoredValue::new(client);

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|s| (s.messages().len(), s.awaiting_reply()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(pending) = chat.try_update(|s| s.begin_send(&text)).flatten() else {
            return;
        };
        input.set(String::new());

        let request = client.with_value(|c| ChatRequest::new(pending.text.clone(), c.as_deref()));
        leptos::task::spawn_local(async move {
            let outcome = send_chat(request).await;
            chat.update(|s| s.finish_send(&pending, outcome));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-panel">
            <div id="chatWindow" class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.with(|s| {
                        s.messages()
                            .iter()
                            .map(|msg| {
                                let class = format!(
                                    "chat-panel__message chat-panel__message--{}",
                                    msg.sender.as_str(),
                                );
                                let text = msg.text.clone();
                                view! { <div class=class>{text}</div> }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>

            <Show when=move || chat.with(ChatState::awaiting_reply)>
                <div class="chat-panel__typing" aria-live="polite">"Typing..."</div>
            </Show>

            <form id="chatForm" class="chat-panel__input-row" on:submit=on_submit>
                <input
                    id="userInput"
                    class="chat-panel__input"
                    type="text"
                    autocomplete="off"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" type="button" on:click=on_click>
                    "Send"
                </button>
            </form>
        </div>
    }
}
