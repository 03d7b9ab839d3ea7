//! `web-sys` implementation of [`PageHost`].
//!
//! Listeners registered here live as long as the page, so their closures are
//! leaked with `Closure::forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlIFrameElement, HtmlScriptElement, KeyboardEvent, Window};

use crate::consts::{CLOSE_ID, LAUNCHER_ID, OPEN_CLASS, PANEL_ID, PANEL_TITLE, ROOT_ID, STYLE_ID, WIDGET_LOADED_MARKER};
use crate::loader::{HostError, KeyChord, LauncherState, PageHost, ScriptTag, WidgetMount, is_toggle_shortcut};
use crate::styles::widget_css;

/// Current window and document.
///
/// # Errors
///
/// Returns [`HostError::NoDocument`] outside a browser page.
pub fn page() -> Result<(Window, Document), HostError> {
    let window = web_sys::window().ok_or(HostError::NoDocument)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    Ok((window, document))
}

/// Whether the window property `name` is truthy.
pub fn window_flag(window: &Window, name: &str) -> bool {
    js_sys::Reflect::get(window, &JsValue::from_str(name)).is_ok_and(|v| v.is_truthy())
}

/// Set the window property `name` to `true`.
///
/// # Errors
///
/// Returns [`HostError::Dom`] if the property cannot be defined.
pub fn set_window_flag(window: &Window, name: &str) -> Result<(), HostError> {
    js_sys::Reflect::set(window, &JsValue::from_str(name), &JsValue::TRUE)?;
    Ok(())
}

/// Every `<script>` in document order.
pub fn script_tags(document: &Document) -> Vec<ScriptTag> {
    let scripts = document.scripts();
    (0..scripts.length())
        .filter_map(|i| scripts.item(i))
        .filter_map(|el| el.dyn_into::<HtmlScriptElement>().ok())
        .map(|script| ScriptTag { src: script.src(), data_client: script.get_attribute("data-client") })
        .collect()
}

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    /// # Errors
    ///
    /// Returns [`HostError::NoDocument`] outside a browser page.
    pub fn new() -> Result<Self, HostError> {
        let (window, document) = page()?;
        Ok(Self { window, document })
    }

    fn element(&self, tag: &str, id: Option<&str>, class: Option<&str>) -> Result<Element, HostError> {
        let el = self.document.create_element(tag)?;
        if let Some(id) = id {
            el.set_id(id);
        }
        if let Some(class) = class {
            el.set_class_name(class);
        }
        Ok(el)
    }

    fn inject_style(&self, accent: &str) -> Result<(), HostError> {
        if self.document.get_element_by_id(STYLE_ID).is_some() {
            return Ok(());
        }
        let style = self.element("style", Some(STYLE_ID), None)?;
        style.set_text_content(Some(&widget_css(accent)));
        match self.document.head() {
            Some(head) => head.append_child(&style)?,
            None => self.body()?.append_child(&style)?,
        };
        Ok(())
    }

    fn body(&self) -> Result<Element, HostError> {
        self.document
            .body()
            .map(Into::into)
            .ok_or(HostError::NoDocument)
    }

    fn build_panel(&self, mount: &WidgetMount) -> Result<(Element, Element), HostError> {
        let panel = self.element("div", Some(PANEL_ID), None)?;
        panel.set_attribute("role", "dialog")?;
        panel.set_attribute("aria-label", PANEL_TITLE)?;

        let header = self.element("div", None, Some("chat-widget__header"))?;
        if let Some(logo) = mount.config.logo_url() {
            let img = self.element("img", None, Some("chat-widget__logo"))?;
            img.set_attribute("src", logo)?;
            img.set_attribute("alt", "")?;
            header.append_child(&img)?;
        }
        let title = self.element("span", None, Some("chat-widget__title"))?;
        title.set_text_content(Some(PANEL_TITLE));
        header.append_child(&title)?;

        let close = self.element("button", Some(CLOSE_ID), None)?;
        close.set_attribute("type", "button")?;
        close.set_attribute("aria-label", "Close chat")?;
        close.set_text_content(Some("\u{00d7}"));
        header.append_child(&close)?;
        panel.append_child(&header)?;

        let frame: HtmlIFrameElement = self.element("iframe", None, Some("chat-widget__frame"))?.unchecked_into();
        frame.set_src(&mount.surface_url);
        frame.set_title(PANEL_TITLE);
        panel.append_child(&frame)?;

        Ok((panel, close))
    }
}

impl PageHost for BrowserHost {
    fn is_loaded(&self) -> bool {
        window_flag(&self.window, WIDGET_LOADED_MARKER)
    }

    fn mark_loaded(&mut self) -> Result<(), HostError> {
        set_window_flag(&self.window, WIDGET_LOADED_MARKER)
    }

    fn scripts(&self) -> Vec<ScriptTag> {
        script_tags(&self.document)
    }

    fn page_origin(&self) -> Option<String> {
        self.window.location().origin().ok()
    }

    fn mount(&mut self, mount: &WidgetMount) -> Result<(), HostError> {
        if let Err(e) = self.inject_style(&mount.config.color) {
            log::warn!("chat widget styles not injected: {e}");
        }

        let root = self.element("div", Some(ROOT_ID), None)?;
        let launcher = self.element("button", Some(LAUNCHER_ID), None)?;
        launcher.set_attribute("type", "button")?;
        launcher.set_attribute("aria-label", "Open chat")?;
        launcher.set_attribute("aria-expanded", "false")?;
        launcher.set_attribute("aria-controls", PANEL_ID)?;
        launcher.set_text_content(Some("\u{1f4ac}"));

        let (panel, close) = self.build_panel(mount)?;
        root.append_child(&panel)?;
        root.append_child(&launcher)?;
        self.body()?.append_child(&root)?;

        let state = Rc::new(RefCell::new(LauncherState::default()));
        let toggle = {
            let launcher = launcher.clone();
            move || {
                let open = state.borrow_mut().toggle();
                if let Err(e) = panel.class_list().toggle_with_force(OPEN_CLASS, open) {
                    log::warn!("chat widget toggle failed: {e:?}");
                }
                let _ = launcher.set_attribute("aria-expanded", if open { "true" } else { "false" });
            }
        };
        let toggle = Rc::new(toggle);

        for target in [&launcher, &close] {
            let toggle = Rc::clone(&toggle);
            let on_click = Closure::wrap(Box::new(move |_e: web_sys::Event| toggle()) as Box<dyn FnMut(web_sys::Event)>);
            target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }

        let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            let chord = KeyChord {
                key: e.key(),
                code: e.code(),
                alt: e.alt_key(),
                shift: e.shift_key(),
                ctrl: e.ctrl_key(),
                meta: e.meta_key(),
            };
            if is_toggle_shortcut(&chord) {
                e.prevent_default();
                toggle();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        self.document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        on_keydown.forget();

        Ok(())
    }
}
