//! Widget parameters carried on the loader's script tag and on the
//! content-surface URL.
//!
//! The loader is included as `<script src="https://host/widget.js?client=..&color=..&logo=..">`.
//! The same three parameters are forwarded to the hosting application as
//! `https://host/?widget=1&client=..&color=..&logo=..`, where the hosted page
//! parses them back with [`WidgetConfig::from_query`].

use url::Url;
use url::form_urlencoded;

#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;

/// File name the loader is served under.
pub const LOADER_FILE_NAME: &str = "widget.js";
/// Accent used when the inclusion carries no (valid) `color`.
pub const DEFAULT_ACCENT: &str = "#2563eb";
/// Query flag that switches the hosted page into widget mode.
pub const WIDGET_MODE_PARAM: &str = "widget";

/// Immutable widget configuration parsed once at load time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Opaque tenant identifier; empty when not configured.
    pub client: String,
    /// CSS color literal applied to the launcher and header.
    pub color: String,
    /// Logo URL; empty when not configured.
    pub logo: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self { client: String::new(), color: DEFAULT_ACCENT.to_owned(), logo: String::new() }
    }
}

impl WidgetConfig {
    /// Parse `client`, `color` and `logo` from a query string (with or
    /// without the leading `?`). Unknown keys are ignored; missing or empty
    /// values take their defaults.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            match key.as_ref() {
                "client" => value.clone_into(&mut config.client),
                "color" if is_css_color_literal(value) => value.clone_into(&mut config.color),
                "logo" => value.clone_into(&mut config.logo),
                _ => {}
            }
        }
        config
    }

    /// Parse the query string of a script `src`, relative or absolute.
    #[must_use]
    pub fn from_script_src(src: &str) -> Self {
        let without_fragment = src.split('#').next().unwrap_or_default();
        match without_fragment.split_once('?') {
            Some((_, query)) => Self::from_query(query),
            None => Self::default(),
        }
    }

    /// Use `client` as the tenant when the query did not carry one.
    #[must_use]
    pub fn with_fallback_client(mut self, client: Option<&str>) -> Self {
        if self.client.is_empty() {
            if let Some(client) = client.map(str::trim).filter(|c| !c.is_empty()) {
                client.clone_into(&mut self.client);
            }
        }
        self
    }

    /// Tenant identifier to send with chat requests, if one was configured.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        Some(self.client.as_str()).filter(|c| !c.is_empty())
    }

    /// Logo URL, if one was configured.
    #[must_use]
    pub fn logo_url(&self) -> Option<&str> {
        Some(self.logo.as_str()).filter(|l| !l.is_empty())
    }

    /// Content-surface URL on `host`:
    /// `<host>/?widget=1&client=<client>&color=<color>&logo=<logo>`.
    #[must_use]
    pub fn surface_url(&self, host: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(WIDGET_MODE_PARAM, "1")
            .append_pair("client", &self.client)
            .append_pair("color", &self.color)
            .append_pair("logo", &self.logo)
            .finish();
        format!("{}/?{query}", host.trim_end_matches('/'))
    }
}

/// Accept hex colors, named colors and functional notations such as
/// `rgb(37, 99, 235)`. Anything that could break out of a style declaration
/// is rejected.
#[must_use]
pub fn is_css_color_literal(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-'))
}

/// Whether a script `src` refers to the loader file `file_name`, ignoring
/// any query string or fragment.
#[must_use]
pub fn is_loader_src(src: &str, file_name: &str) -> bool {
    let path = src.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/').next() == Some(file_name)
}

/// Position of the loader among script sources listed in document order,
/// scanning from the most recently inserted.
pub fn find_loader_position<'a, I>(srcs: I, file_name: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: DoubleEndedIterator + ExactSizeIterator,
{
    srcs.into_iter().rposition(|src| is_loader_src(src, file_name))
}

/// Origin (`scheme://host[:port]`) of an absolute URL.
#[must_use]
pub fn origin_of(src: &str) -> Option<String> {
    let url = Url::parse(src).ok()?;
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}
