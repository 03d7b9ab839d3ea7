//! Element ids, class names and page markers shared by the loader and panel.

// ── Page markers ────────────────────────────────────────────────

/// Window property set once the launcher has been injected.
pub const WIDGET_LOADED_MARKER: &str = "__chatWidgetLoaded";

/// Window property set once an inline panel has been bound.
pub const PANEL_BOUND_MARKER: &str = "__chatPanelBound";

// ── Launcher DOM ────────────────────────────────────────────────

pub const STYLE_ID: &str = "chat-widget-style";
pub const ROOT_ID: &str = "chat-widget";
pub const LAUNCHER_ID: &str = "chat-widget-launcher";
pub const PANEL_ID: &str = "chat-widget-panel";
pub const CLOSE_ID: &str = "chat-widget-close";

/// Class present on the panel while it is shown.
pub const OPEN_CLASS: &str = "chat-widget__panel--open";

pub const PANEL_TITLE: &str = "Chat with us";

// ── Inline panel ────────────────────────────────────────────────

/// Base class of every rendered transcript entry; the sender is added as a
/// second class (`message user`, `message bot`).
pub const MESSAGE_CLASS: &str = "message";
