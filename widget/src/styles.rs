//! Stylesheet injected with the launcher.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

const TEMPLATE: &str = include_str!("widget.css");
const ACCENT_PLACEHOLDER: &str = "__ACCENT__";

/// Launcher stylesheet painted with `accent`. The accent must already be a
/// validated CSS color literal.
#[must_use]
pub fn widget_css(accent: &str) -> String {
    TEMPLATE.replace(ACCENT_PLACEHOLDER, accent)
}
