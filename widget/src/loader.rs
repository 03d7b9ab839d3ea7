//! Widget load and mount logic, independent of the browser.
//!
//! DESIGN
//! ======
//! [`boot`] drives any [`PageHost`]: the browser implementation lives in
//! [`crate::dom`], tests use an in-memory host. The page-wide loaded marker is
//! owned by the host because two inclusions of the loader can end up with
//! separate module instances, so a Rust static would not see the first load.
//!
//! State machine: `Unloaded -> Loaded(closed) <-> Loaded(open)`. The open flag
//! lives in [`LauncherState`] and is only changed by [`LauncherState::toggle`].

use protocol::WidgetConfig;
use protocol::widget::{LOADER_FILE_NAME, find_loader_position, origin_of};

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

/// Failures talking to the page. None of them escape the exported entry
/// points; they are logged and the page keeps working.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no window or document available")]
    NoDocument,
    #[error("cannot determine the host the widget was served from")]
    NoOrigin,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for HostError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

/// A `<script>` element as seen by the loader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptTag {
    /// Resolved (absolute) `src`; empty for inline scripts.
    pub src: String,
    /// `data-client` attribute, if present.
    pub data_client: Option<String>,
}

/// Everything the host needs to inject the launcher and panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetMount {
    pub config: WidgetConfig,
    /// Iframe `src`: the hosting application's chat page in widget mode.
    pub surface_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootOutcome {
    Mounted(WidgetMount),
    AlreadyLoaded,
}

/// Page operations the loader needs.
pub trait PageHost {
    /// Whether the page-wide loaded marker is set.
    fn is_loaded(&self) -> bool;

    /// Set the page-wide loaded marker.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the marker cannot be written.
    fn mark_loaded(&mut self) -> Result<(), HostError>;

    /// Every script element in document order.
    fn scripts(&self) -> Vec<ScriptTag>;

    /// Origin of the embedding page.
    fn page_origin(&self) -> Option<String>;

    /// Inject styles, launcher, panel and iframe, and wire the toggles.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when an element cannot be created or attached.
    fn mount(&mut self, mount: &WidgetMount) -> Result<(), HostError>;
}

/// Load the widget once per page.
///
/// # Errors
///
/// Returns [`HostError`] when the marker cannot be set, no host origin can be
/// determined, or mounting fails.
pub fn boot<H: PageHost>(host: &mut H) -> Result<BootOutcome, HostError> {
    if host.is_loaded() {
        return Ok(BootOutcome::AlreadyLoaded);
    }
    host.mark_loaded()?;

    let mount = resolve_mount(&host.scripts(), host.page_origin().as_deref())?;
    host.mount(&mount)?;
    Ok(BootOutcome::Mounted(mount))
}

/// Read the widget parameters from the most recently inserted loader tag.
///
/// Without a loader tag the defaults are used and the iframe points at the
/// embedding page's own origin.
///
/// # Errors
///
/// Returns [`HostError::NoOrigin`] when neither the loader `src` nor the page
/// yields an origin.
pub fn resolve_mount(scripts: &[ScriptTag], page_origin: Option<&str>) -> Result<WidgetMount, HostError> {
    let tag = find_loader_position(scripts.iter().map(|tag| tag.src.as_str()), LOADER_FILE_NAME)
        .map(|index| &scripts[index]);

    let (config, host) = match tag {
        Some(tag) => {
            let config = WidgetConfig::from_script_src(&tag.src).with_fallback_client(tag.data_client.as_deref());
            (config, origin_of(&tag.src).or_else(|| page_origin.map(ToOwned::to_owned)))
        }
        None => {
            log::warn!("{LOADER_FILE_NAME} script tag not found, using default widget settings");
            (WidgetConfig::default(), page_origin.map(ToOwned::to_owned))
        }
    };

    let host = host.ok_or(HostError::NoOrigin)?;
    let surface_url = config.surface_url(&host);
    Ok(WidgetMount { config, surface_url })
}

/// Open/closed state of a mounted launcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LauncherState {
    open: bool,
}

impl LauncherState {
    /// Flip open/closed and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }
}

/// Modifier and key state of a keydown event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub code: String,
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

/// `Alt+Shift+C` toggles the panel. `code` is checked as well as `key`
/// because Alt changes the produced character on some layouts.
#[must_use]
pub fn is_toggle_shortcut(chord: &KeyChord) -> bool {
    chord.alt
        && chord.shift
        && !chord.ctrl
        && !chord.meta
        && (chord.code == "KeyC" || chord.key.eq_ignore_ascii_case("c"))
}
