//! Bootstrap scripts third-party pages include with a single `<script>` tag.
//!
//! Both scripts resolve the origin they were served from and import the
//! `chat-widget` wasm bundle from `/pkg/widget/` on that origin. The bundle
//! itself is built with `wasm-pack build widget --target web`.

use axum::http::header;
use axum::response::IntoResponse;

const WIDGET_BOOTSTRAP: &str = include_str!("../../templates/widget_bootstrap.js");
const CHAT_BOOTSTRAP: &str = include_str!("../../templates/chat_bootstrap.js");

const JAVASCRIPT: &str = "application/javascript; charset=utf-8";
const CACHE_CONTROL: &str = "public, max-age=300";

/// `GET /widget.js`: floating launcher + iframe loader.
pub async fn widget_js() -> impl IntoResponse {
    script(WIDGET_BOOTSTRAP)
}

/// `GET /chat.js`: binds chat markup already present on the page.
pub async fn chat_js() -> impl IntoResponse {
    script(CHAT_BOOTSTRAP)
}

fn script(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, JAVASCRIPT), (header::CACHE_CONTROL, CACHE_CONTROL)], body)
}

#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;
