//! Inline chat panel binder.
//!
//! Attaches to chat markup the page already has (a transcript element, a
//! text input and a form or send button), renders the greeting into an empty
//! transcript and exchanges messages with `POST /chat`.
//!
//! Element lookup is a capability query: the id first, then each fallback
//! selector in order. A missing transcript, input or send control is logged
//! and nothing is bound.

use std::cell::RefCell;
use std::rc::Rc;

use protocol::widget::origin_of;
use protocol::{CHAT_ENDPOINT, ChatMessage, ChatRequest, Transcript, WidgetConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

use crate::consts::{MESSAGE_CLASS, PANEL_BOUND_MARKER};
use crate::dom::{page, script_tags, set_window_flag, window_flag};
use crate::loader::HostError;

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Where to look for one panel element.
#[derive(Clone, Copy, Debug)]
pub struct Lookup {
    pub id: &'static str,
    pub fallbacks: &'static [&'static str],
}

impl Lookup {
    /// Selectors in lookup order, starting with the id.
    pub fn selectors(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(format!("#{}", self.id)).chain(self.fallbacks.iter().map(|s| (*s).to_owned()))
    }
}

pub const CHAT_WINDOW: Lookup = Lookup {
    id: "chatWindow",
    fallbacks: &["#chat-window", ".chat-window", "[data-chat-window]"],
};

pub const USER_INPUT: Lookup = Lookup {
    id: "userInput",
    fallbacks: &["#user-input", ".chat-input", "[data-chat-input]"],
};

pub const CHAT_FORM: Lookup = Lookup {
    id: "chatForm",
    fallbacks: &["#chat-form", "form.chat-form", "[data-chat-form]"],
};

pub const SEND_BUTTON: Lookup = Lookup {
    id: "sendButton",
    fallbacks: &["#send-button", ".send-button", "[data-chat-send]"],
};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MissingPart {
    #[error("chat window element not found")]
    Window,
    #[error("chat input element not found")]
    Input,
    #[error("neither a chat form nor a send button was found")]
    SendControl,
}

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error(transparent)]
    Missing(#[from] MissingPart),
    #[error(transparent)]
    Host(#[from] HostError),
}

/// The elements a panel binds to.
#[derive(Debug, PartialEq, Eq)]
pub struct PanelParts<E> {
    pub window: E,
    pub input: E,
    pub form: Option<E>,
    pub send: Option<E>,
}

/// Check that the found elements are enough to run a panel.
///
/// # Errors
///
/// Returns the first [`MissingPart`]; a panel needs its transcript, its
/// input, and at least one of a form or a send button.
pub fn assemble<E>(
    window: Option<E>,
    input: Option<E>,
    form: Option<E>,
    send: Option<E>,
) -> Result<PanelParts<E>, MissingPart> {
    let window = window.ok_or(MissingPart::Window)?;
    let input = input.ok_or(MissingPart::Input)?;
    if form.is_none() && send.is_none() {
        return Err(MissingPart::SendControl);
    }
    Ok(PanelParts { window, input, form, send })
}

/// `/chat` on the origin that served the panel script, or the page-relative
/// path when the script URL has no origin.
#[must_use]
pub fn chat_endpoint(script_src: &str) -> String {
    match origin_of(script_src) {
        Some(origin) => format!("{origin}{CHAT_ENDPOINT}"),
        None => CHAT_ENDPOINT.to_owned(),
    }
}

/// Tenant for the panel: `client` from the script query, else the tag's
/// `data-client` attribute.
#[must_use]
pub fn panel_client(script_src: &str, data_client: Option<&str>) -> Option<String> {
    WidgetConfig::from_script_src(script_src)
        .with_fallback_client(data_client)
        .client_id()
        .map(ToOwned::to_owned)
}

/// Class attribute of a rendered entry, e.g. `message user`.
#[must_use]
pub fn message_class(message: &ChatMessage) -> String {
    format!("{MESSAGE_CLASS} {}", message.sender.as_str())
}

fn find(document: &Document, lookup: &Lookup) -> Option<Element> {
    if let Some(el) = document.get_element_by_id(lookup.id) {
        return Some(el);
    }
    lookup.selectors().skip(1).find_map(|selector| document.query_selector(&selector).ok().flatten())
}

struct InlinePanel {
    document: Document,
    window: Element,
    input: HtmlInputElement,
    transcript: RefCell<Transcript>,
    endpoint: String,
    client: Option<String>,
}

impl InlinePanel {
    fn render(&self, message: &ChatMessage) {
        let appended = self.document.create_element("div").and_then(|el| {
            el.set_class_name(&message_class(message));
            el.set_text_content(Some(&message.text));
            self.window.append_child(&el)
        });
        if let Err(e) = appended {
            log::warn!("chat message not rendered: {e:?}");
            return;
        }
        self.window.set_scroll_top(self.window.scroll_height());
    }

    fn submit(self: &Rc<Self>) {
        let raw = self.input.value();
        let Some(pending) = self.transcript.borrow_mut().submit(&raw) else {
            return;
        };
        self.render(&ChatMessage::user(pending.text.clone()));
        self.input.set_value("");

        let request = ChatRequest::new(pending.text.clone(), self.client.as_deref());
        let panel = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = protocol::fetch::send_to_server(&panel.endpoint, &request).await;
            log::debug!("chat exchange {} settled", pending.seq);
            let reply = panel.transcript.borrow_mut().settle(&pending, outcome).clone();
            panel.render(&reply);
        });
    }
}

/// Bind the inline panel once per page.
///
/// # Errors
///
/// Returns [`BindError`] when the page has no document or lacks one of the
/// required elements.
pub fn bind(script_src: &str) -> Result<(), BindError> {
    let (window, document) = page()?;
    if window_flag(&window, PANEL_BOUND_MARKER) {
        log::debug!("chat panel already bound");
        return Ok(());
    }

    let parts = assemble(
        find(&document, &CHAT_WINDOW),
        find(&document, &USER_INPUT),
        find(&document, &CHAT_FORM),
        find(&document, &SEND_BUTTON),
    )?;
    let input: HtmlInputElement = parts
        .input
        .dyn_into()
        .map_err(|_| HostError::Dom("chat input is not an <input> element".to_owned()))?;

    let data_client = script_tags(&document)
        .into_iter()
        .rev()
        .find(|tag| tag.src == script_src)
        .and_then(|tag| tag.data_client);

    set_window_flag(&window, PANEL_BOUND_MARKER)?;

    let panel = Rc::new(InlinePanel {
        document,
        window: parts.window,
        input: input.clone(),
        transcript: RefCell::new(Transcript::new()),
        endpoint: chat_endpoint(script_src),
        client: panel_client(script_src, data_client.as_deref()),
    });

    let panel_endpoint = panel.endpoint.clone();

    if panel.window.child_element_count() == 0 && panel.transcript.borrow_mut().greet_if_empty() {
        let greeting = panel.transcript.borrow().entries()[0].clone();
        panel.render(&greeting);
    }

    if let Some(form) = &parts.form {
        let panel = Rc::clone(&panel);
        let on_submit = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            panel.submit();
        }) as Box<dyn FnMut(web_sys::Event)>);
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            .map_err(HostError::from)?;
        on_submit.forget();
    }

    if let Some(send) = &parts.send {
        let panel = Rc::clone(&panel);
        let on_click = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            panel.submit();
        }) as Box<dyn FnMut(web_sys::Event)>);
        send.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(HostError::from)?;
        on_click.forget();
    }

    let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == "Enter" && !e.shift_key() {
            e.prevent_default();
            panel.submit();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    input
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .map_err(HostError::from)?;
    on_keydown.forget();

    log::info!("chat panel bound, posting to {panel_endpoint}");
    Ok(())
}
