//! How the chat page was asked to render.
//!
//! The embeddable loader frames `/?widget=1&client=..&color=..&logo=..`; any
//! other request renders the full page without the tenant accent.

use protocol::WidgetConfig;
use protocol::widget::{DEFAULT_ACCENT, WIDGET_MODE_PARAM, is_css_color_literal};

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Surface {
    /// Standalone page at `/`.
    Page,
    /// Compact panel inside the widget iframe.
    Widget(WidgetConfig),
}

impl Surface {
    /// Build the surface from query parameters looked up by name.
    pub fn from_params(param: impl Fn(&str) -> Option<String>) -> Self {
        if param(WIDGET_MODE_PARAM).as_deref() != Some("1") {
            return Self::Page;
        }
        let value = |key: &str| param(key).map(|v| v.trim().to_owned()).unwrap_or_default();
        let color = value("color");
        Self::Widget(WidgetConfig {
            client: value("client"),
            color: if is_css_color_literal(&color) { color } else { DEFAULT_ACCENT.to_owned() },
            logo: value("logo"),
        })
    }

    /// Tenant slug to send with every request, if any.
    pub fn client(&self) -> Option<&str> {
        match self {
            Self::Page => None,
            Self::Widget(config) => config.client_id(),
        }
    }

    /// Inline style painting the tenant accent; `None` on the full page.
    pub fn accent_style(&self) -> Option<String> {
        match self {
            Self::Page => None,
            Self::Widget(config) => Some(format!("--accent: {}", config.color)),
        }
    }
}
