//! Embeddable chat widget and inline panel binder.
//!
//! This crate is compiled to WebAssembly with `wasm-pack build widget --target web`
//! and imported by the server's `/widget.js` and `/chat.js` bootstrap scripts.
//! Third-party pages never call it directly: the bootstrap resolves the origin
//! it was served from, loads this bundle from `/pkg/widget/` and calls one of
//! the two exported entry points.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`loader`] | Testable load/mount logic behind the [`loader::PageHost`] seam |
//! | [`panel`] | Inline panel element lookup and the send pipeline |
//! | [`dom`] | `web-sys` implementation of the page host |
//! | [`styles`] | Stylesheet injected with the launcher |
//! | [`consts`] | Element ids, class names and page markers |

use wasm_bindgen::prelude::*;

pub mod consts;
pub mod dom;
pub mod loader;
pub mod panel;
pub mod styles;

/// Inject the floating launcher and iframe panel. A second call on the same
/// page is a no-op.
#[wasm_bindgen]
pub fn boot_widget() {
    init_logging();
    let outcome = dom::BrowserHost::new().and_then(|mut host| loader::boot(&mut host));
    match outcome {
        Ok(loader::BootOutcome::Mounted(mount)) => {
            log::info!("chat widget mounted for {}", mount.surface_url);
        }
        Ok(loader::BootOutcome::AlreadyLoaded) => log::debug!("chat widget already loaded"),
        Err(e) => log::warn!("chat widget not loaded: {e}"),
    }
}

/// Bind chat markup already on the page to `POST /chat` on the origin that
/// served `script_src`.
#[wasm_bindgen]
pub fn bind_panel(script_src: String) {
    init_logging();
    if let Err(e) = panel::bind(&script_src) {
        log::warn!("chat panel not bound: {e}");
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
